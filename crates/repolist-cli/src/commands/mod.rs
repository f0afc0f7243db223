// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the repolist CLI.

pub mod sync;
