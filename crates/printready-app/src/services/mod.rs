// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — bridges the command line to the printready engine.
//
// Handles what the engine deliberately leaves out: file names, extension
// whitelisting, configuration files, and client-facing results.

pub mod app_config;
pub mod app_services;
pub mod data_dir;
