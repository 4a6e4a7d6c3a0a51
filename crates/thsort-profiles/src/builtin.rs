//! Header blocks of the LIMS table views, shipped with the binary.

use thsort_model::{CellTag, ViewProfile};

struct BuiltinProfile {
    name: &'static str,
    description: &'static str,
    tag: &'static str,
    prefs: &'static str,
    block: &'static str,
}

const BUILTINS: &[BuiltinProfile] = &[
    BuiltinProfile {
        name: "finance",
        description: "Finance records table",
        tag: CellTag::TABLE_HEAD,
        prefs: "financeColumnPrefs",
        block: include_str!("../data/finance.tsx"),
    },
    BuiltinProfile {
        name: "bioinformatics",
        description: "Bioinformatics sample table",
        tag: CellTag::TABLE_HEAD,
        prefs: "columnPrefs",
        block: include_str!("../data/bioinformatics.tsx"),
    },
    BuiltinProfile {
        name: "nutrition",
        description: "Nutrition management table (plain th cells)",
        tag: CellTag::TH,
        prefs: "nutritionColumnPrefs",
        block: include_str!("../data/nutrition.tsx"),
    },
    BuiltinProfile {
        name: "process_master",
        description: "Lab process master sheet",
        tag: CellTag::TABLE_HEAD,
        prefs: "processMasterColumnPrefs",
        block: include_str!("../data/process_master.tsx"),
    },
    BuiltinProfile {
        name: "report",
        description: "Report management table",
        tag: CellTag::TABLE_HEAD,
        prefs: "reportColumnPrefs",
        block: include_str!("../data/report.tsx"),
    },
];

/// Names of the built-in profiles in declaration order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|builtin| builtin.name)
}

/// All built-in profiles.
pub fn builtin_profiles() -> Vec<ViewProfile> {
    BUILTINS.iter().map(to_profile).collect()
}

fn to_profile(builtin: &BuiltinProfile) -> ViewProfile {
    let tag = if builtin.tag == CellTag::TH {
        CellTag::th()
    } else {
        CellTag::table_head()
    };
    ViewProfile::new(builtin.name, builtin.block)
        .with_description(builtin.description)
        .with_tag(tag)
        .with_prefs(builtin.prefs)
}
