// ABOUTME: Command modules for recipe-cli
// ABOUTME: Offline catalog search and extraction, plus saved recipe store commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

pub mod extract;
pub mod find;
pub mod store;
