// ABOUTME: Re-exports command modules for recipe-cli
// ABOUTME: One module per subcommand: recommend, feedback, add, solar-term, csv
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod add;
pub mod csv;
pub mod feedback;
pub mod recommend;
pub mod solar;
