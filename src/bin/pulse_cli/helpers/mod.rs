// ABOUTME: Re-exports helper modules for pulse-cli
// ABOUTME: Provides catalog loading and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalogs;
pub mod display;
