// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how a piece of copy gets its number.
//!
//! Keyword coverage dominates. Each distinct keyword found in the text is worth
//! more than the whole length bonus, so a text can never climb past another one
//! that covers more keywords just by hitting the preferred length.

mod core;

pub use core::*;
