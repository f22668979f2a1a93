// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nsc encode` / `nsc decode` - Session name codec

use anyhow::Result;
use ns_core::{decode_session_name, encode_session_name, WorkerName};
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize, PartialEq)]
struct Mapping {
    name: String,
    fragment: String,
}

fn encoded(name: &str) -> Mapping {
    Mapping {
        name: WorkerName::new(name).into_inner(),
        fragment: encode_session_name(name),
    }
}

fn decoded(fragment: &str) -> Mapping {
    Mapping {
        name: decode_session_name(fragment),
        fragment: fragment.to_string(),
    }
}

pub fn encode(name: &str, format: OutputFormat) -> Result<()> {
    let mapping = encoded(name);
    match format {
        OutputFormat::Text => println!("{}", mapping.fragment),
        OutputFormat::Json => print_json(&mapping)?,
    }
    Ok(())
}

pub fn decode(fragment: &str, format: OutputFormat) -> Result<()> {
    let mapping = decoded(fragment);
    match format {
        OutputFormat::Text => println!("{}", mapping.name),
        OutputFormat::Json => print_json(&mapping)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
