//! Test utilities shared across the parser test modules.

use crate::config::LoaderConfig;
use crate::parser::converters::ConverterRegistry;
use crate::parser::record_mapper::{FieldBinding, Record};
use crate::parser::value::ValueKind;

// Test modules
mod converter_tests;

/// Small record type exercising scalar bindings, an untagged field,
/// and a counting post-parse hook
#[derive(Debug, Default)]
pub struct Sample {
    pub name: String,
    pub level: i32,
    pub wood: i64,
    /// Untagged, must stay at its default
    pub note: String,
    /// Incremented by the hook
    pub hook_runs: usize,
}

static SAMPLE_BINDINGS: [FieldBinding<Sample>; 4] = [
    FieldBinding {
        field: "name",
        tag: "Name",
        kind: ValueKind::Text,
        assign: |r, v| {
            r.name = v.into_text()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "level",
        tag: "Level",
        kind: ValueKind::I32,
        assign: |r, v| {
            r.level = v.into_i32()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "wood",
        tag: "Wood",
        kind: ValueKind::I64,
        assign: |r, v| {
            r.wood = v.into_i64()?;
            Ok(())
        },
    },
    // tagless descriptor, skipped by the mapper
    FieldBinding {
        field: "note",
        tag: "",
        kind: ValueKind::Text,
        assign: |r, v| {
            r.note = v.into_text()?;
            Ok(())
        },
    },
];

impl Record for Sample {
    fn bindings() -> &'static [FieldBinding<Self>] {
        &SAMPLE_BINDINGS
    }

    fn key(&self) -> String {
        format!("{}_{}", self.name, self.level)
    }

    fn after_parse(&mut self) {
        self.hook_runs += 1;
    }
}

/// Observes hook ordering relative to field assignment
#[derive(Debug, Default)]
pub struct HookProbe {
    pub level: i32,
    pub level_at_hook: i32,
    pub hook_runs: usize,
}

static HOOK_PROBE_BINDINGS: [FieldBinding<HookProbe>; 1] = [FieldBinding {
    field: "level",
    tag: "Level",
    kind: ValueKind::I32,
    assign: |r, v| {
        r.level = v.into_i32()?;
        Ok(())
    },
}];

impl Record for HookProbe {
    fn bindings() -> &'static [FieldBinding<Self>] {
        &HOOK_PROBE_BINDINGS
    }

    fn key(&self) -> String {
        self.level.to_string()
    }

    fn after_parse(&mut self) {
        self.hook_runs += 1;
        // observes the tagged field already being set
        self.level_at_hook = self.level;
    }
}

/// A hook that must never fire; used to prove failed rows skip the hook
#[derive(Debug, Default)]
pub struct PanicHook {
    pub level: i32,
}

static PANIC_HOOK_BINDINGS: [FieldBinding<PanicHook>; 1] = [FieldBinding {
    field: "level",
    tag: "Level",
    kind: ValueKind::I32,
    assign: |r, v| {
        r.level = v.into_i32()?;
        Ok(())
    },
}];

impl Record for PanicHook {
    fn bindings() -> &'static [FieldBinding<Self>] {
        &PANIC_HOOK_BINDINGS
    }

    fn key(&self) -> String {
        self.level.to_string()
    }

    fn after_parse(&mut self) {
        panic!("hook must not run for a failed record");
    }
}

/// Default loader configuration used by parser and table tests
pub fn sample_config() -> LoaderConfig {
    LoaderConfig::default()
}

/// Registry with every built-in converter
pub fn sample_converters() -> ConverterRegistry {
    ConverterRegistry::default()
}
