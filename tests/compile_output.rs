use std::fs;

use balatro_modgen::model::{ConfigField, DEFAULT_OUTPUT_NAME, ModConfig};
use balatro_modgen::processor::hooks::HOOKS;
use balatro_modgen::processor::lexer::string_literals;
use balatro_modgen::processor::{compile, verify};

/// Lines of `a` and `b` that differ, position by position.
fn changed_lines<'a>(a: &'a str, b: &'a str) -> Vec<(&'a str, &'a str)> {
    let (la, lb): (Vec<_>, Vec<_>) = (a.lines().collect(), b.lines().collect());
    assert_eq!(la.len(), lb.len(), "line count changed");
    la.into_iter().zip(lb).filter(|(x, y)| x != y).collect()
}

#[test]
fn default_output_matches_reference_file() {
    let expected = fs::read_to_string("tests/default_mod.lua").unwrap();
    let out = compile(&ModConfig::default(), DEFAULT_OUTPUT_NAME);
    assert_eq!(out, expected);
}

#[test]
fn compile_is_deterministic() {
    let cfg = ModConfig::default().with_field(ConfigField::InterestCap, 99);
    assert_eq!(compile(&cfg, "Same"), compile(&cfg, "Same"));
}

#[test]
fn each_field_changes_only_its_declaration() {
    let base = ModConfig::default();
    let before = compile(&base, "Mod");

    for field in ConfigField::ALL {
        let after = compile(&base.with_field(field, 1234), "Mod");
        let old_line = format!("local {} = {}", field.lua_const(), base.get(field));
        let new_line = format!("local {} = 1234", field.lua_const());
        assert_eq!(
            changed_lines(&before, &after),
            vec![(old_line.as_str(), new_line.as_str())],
            "field {field:?}"
        );
    }
}

#[test]
fn name_changes_only_header_and_load_message() {
    let cfg = ModConfig::default();
    let (alpha, beta) = (compile(&cfg, "Alpha"), compile(&cfg, "Beta"));
    assert_eq!(
        changed_lines(&alpha, &beta),
        vec![
            ("--- MOD_NAME: Alpha", "--- MOD_NAME: Beta"),
            ("--- MOD_ID: Alpha", "--- MOD_ID: Beta"),
            (
                "sendDebugMessage(\"Alpha loaded!\")",
                "sendDebugMessage(\"Beta loaded!\")"
            ),
        ]
    );
}

#[test]
fn hook_block_is_fixed() {
    let inputs = [
        (ModConfig::default(), "CustomSlotsMoney"),
        (ModConfig::default().with_field(ConfigField::JokerSlotsShop, -9), "x\"y\nz"),
        (
            ModConfig::default().with_field(ConfigField::StartingMoney, i64::MAX),
            "",
        ),
    ];
    for (cfg, name) in inputs {
        let out = compile(&cfg, name);
        assert_eq!(out.matches(HOOKS).count(), 1, "name {name:?}");
    }
}

#[test]
fn hostile_names_round_trip() {
    let names = [
        "A\"B",
        "\"",
        "trailing\\",
        "\\\"",
        "line\nbreak",
        "cr\r\nlf",
        "\")\nos.exit()\n--",
        "nul\0bell\x07",
        "digits\x01",
        "'single'",
        "Mod [[long]] --[[x]]",
        "Ünïcødé 🃏",
    ];

    for name in names {
        let out = compile(&ModConfig::default(), name);
        verify(&out, name).unwrap_or_else(|e| panic!("{name:?}: {e}"));

        let literals = string_literals(&out).unwrap();
        assert_eq!(
            literals,
            vec![
                format!("{name} loaded!"),
                "Joker Slots: ".to_string(),
                "Starting Money: $".to_string(),
            ],
            "name {name:?}"
        );
    }
}

#[test]
fn quote_does_not_close_literal_early() {
    let out = compile(&ModConfig::default(), "A\"B");
    let line = out
        .lines()
        .find(|l| l.contains("loaded!"))
        .expect("load message present");
    assert_eq!(line, r#"sendDebugMessage("A\"B loaded!")"#);
}
