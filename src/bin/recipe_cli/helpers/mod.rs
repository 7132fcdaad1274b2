// ABOUTME: Re-exports helper modules for recipe-cli
// ABOUTME: Output formatting for recommendations, solar terms, and CSV reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
