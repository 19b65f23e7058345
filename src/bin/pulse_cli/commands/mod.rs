// ABOUTME: Re-exports command modules for pulse-cli
// ABOUTME: Provides access to calculator, catalog, and assistant commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculate;
pub mod catalog;
pub mod chat;
