// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        resolve / build-config / credentials
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML + env, validated    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!             signing      variant   render
//!          key.properties  policy   text/json/gradle
//!                                   BuildConfig.java
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod signing;
pub mod variant;
