//! Building definitions loaded from the `all_buildings` table.
//!
//! One record per building level. Tagged fields come straight from the
//! table columns; the resource cost aggregate and the effect map are
//! derived in the post-parse hook.

use std::collections::HashMap;

use crate::effects;
use crate::parser::record_mapper::{FieldBinding, Record};
use crate::parser::value::{TimeValue, ValueKind};

/// File base name of the building table
pub const BUILDINGS_TABLE: &str = "all_buildings";

/// Resource amounts a building consumes when constructed
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResourceCost {
    pub wood: i64,
    pub ivory: i64,
    pub leather: i64,
    pub meat: i64,
    pub mana: i64,
}

/// One building at one level
#[derive(Debug, Default, Clone)]
pub struct Building {
    pub name: String,
    pub level: i32,

    pub build_time: TimeValue,
    pub destruct_time: TimeValue,

    pub upgradeable: bool,
    pub destroyable: bool,

    pub wood: i64,
    pub ivory: i64,
    pub leather: i64,
    pub meat: i64,

    pub power: i64,
    pub exp: i64,

    pub item: HashMap<String, String>,
    pub pre_building: HashMap<String, i64>,
    pub buffs: HashMap<String, f32>,

    /// Derived from `buffs` by the effect registration seam
    pub effects: HashMap<String, f32>,

    /// Derived aggregate of the resource columns
    pub cost: ResourceCost,
}

static BUILDING_BINDINGS: [FieldBinding<Building>; 15] = [
    FieldBinding {
        field: "name",
        tag: "STR_BuildingName",
        kind: ValueKind::Text,
        assign: |r, v| {
            r.name = v.into_text()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "level",
        tag: "INT_Lvl",
        kind: ValueKind::I32,
        assign: |r, v| {
            r.level = v.into_i32()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "build_time",
        tag: "INT_Time",
        kind: ValueKind::Time,
        assign: |r, v| {
            r.build_time = v.into_time()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "destruct_time",
        tag: "INT_DestructTime",
        kind: ValueKind::Time,
        assign: |r, v| {
            r.destruct_time = v.into_time()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "upgradeable",
        tag: "BOOL_Upgradable",
        kind: ValueKind::Bool,
        assign: |r, v| {
            r.upgradeable = v.into_bool()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "destroyable",
        tag: "BOOL_Destructable",
        kind: ValueKind::Bool,
        assign: |r, v| {
            r.destroyable = v.into_bool()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "wood",
        tag: "INT_Wood",
        kind: ValueKind::I64,
        assign: |r, v| {
            r.wood = v.into_i64()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "ivory",
        tag: "INT_Ivory",
        kind: ValueKind::I64,
        assign: |r, v| {
            r.ivory = v.into_i64()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "leather",
        tag: "INT_Leather",
        kind: ValueKind::I64,
        assign: |r, v| {
            r.leather = v.into_i64()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "meat",
        tag: "INT_Meat",
        kind: ValueKind::I64,
        assign: |r, v| {
            r.meat = v.into_i64()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "power",
        tag: "INT_Power",
        kind: ValueKind::I64,
        assign: |r, v| {
            r.power = v.into_i64()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "exp",
        tag: "INT_Xp",
        kind: ValueKind::I64,
        assign: |r, v| {
            r.exp = v.into_i64()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "item",
        tag: "TABLE_Item",
        kind: ValueKind::TextMap,
        assign: |r, v| {
            r.item = v.into_text_map()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "pre_building",
        tag: "TABLE_Pre",
        kind: ValueKind::IntMap,
        assign: |r, v| {
            r.pre_building = v.into_int_map()?;
            Ok(())
        },
    },
    FieldBinding {
        field: "buffs",
        tag: "TABLE_Para",
        kind: ValueKind::FloatMap,
        assign: |r, v| {
            r.buffs = v.into_float_map()?;
            Ok(())
        },
    },
];

impl Record for Building {
    fn bindings() -> &'static [FieldBinding<Self>] {
        &BUILDING_BINDINGS
    }

    fn key(&self) -> String {
        format!("{}_lvl{}", self.name, self.level)
    }

    fn after_parse(&mut self) {
        self.cost = ResourceCost {
            wood: self.wood,
            ivory: self.ivory,
            leather: self.leather,
            meat: self.meat,
            mana: 0,
        };
        self.effects = effects::register_buffs(&self.buffs);
    }
}
