//! The functional core: config + output name → Lua script text.
pub mod escape;
pub mod hooks;
pub mod lexer;
pub mod template;

use anyhow::{Result, anyhow};

use crate::model::{ConfigField, FieldGroup, ModConfig};
use hooks::*;
use lexer::{Lexer, Token};
use template::Template;

/// Build the full Steamodded script. Pure and total: every input compiles.
pub fn compile(config: &ModConfig, output_name: &str) -> String {
    build(config, output_name).render()
}

/// Section list behind `compile`, exposed for inspection.
pub fn build(config: &ModConfig, output_name: &str) -> Template {
    let mut t = Template::new();

    // ── Header ─────────────────────────────────────────────────────
    t.lit(HEADER_START)
        .lit(HEADER_NAME)
        .comment(output_name)
        .lit("\n")
        .lit(HEADER_ID)
        .comment(output_name)
        .lit("\n")
        .lit(HEADER_TAIL);

    // ── Constants, one banner per group ─────────────────────────────
    for group in [FieldGroup::Slots, FieldGroup::Money] {
        t.lit("\n")
            .lit(BANNER_RULE)
            .lit(CONFIG_BANNER)
            .lit(group.label())
            .lit("\n")
            .lit(BANNER_RULE);
        for field in ConfigField::ALL.into_iter().filter(|f| f.group() == group) {
            t.lit("local ")
                .lit(field.lua_const())
                .lit(" = ")
                .number(config.get(field))
                .lit("\n");
        }
    }

    // ── Aggregate table ─────────────────────────────────────────────
    t.lit("\n")
        .lit(BANNER_RULE)
        .lit(CODE_BANNER)
        .lit(BANNER_RULE)
        .lit("\n")
        .lit(MOD_CONFIG_OPEN);
    let last = ConfigField::ALL.len() - 1;
    for (i, field) in ConfigField::ALL.into_iter().enumerate() {
        t.lit("    ")
            .lit(field.snake_key())
            .lit(" = ")
            .lit(field.lua_const())
            .lit(if i == last { "\n" } else { ",\n" });
    }
    t.lit(MOD_CONFIG_CLOSE);

    // ── Hooks + load messages ───────────────────────────────────────
    t.lit("\n")
        .lit(HOOKS)
        .lit("\n")
        .lit(LOG_CALL)
        .lua_string(&format!("{output_name}{LOADED_SUFFIX}"))
        .lit(")\n")
        .lit(LOG_TAIL);

    t
}

/// Re-scan a compiled script and check that the name survived intact.
///
/// Fails if any literal is unterminated, or if the header comments / the
/// load message do not decode back to `output_name`.
pub fn verify(script: &str, output_name: &str) -> Result<()> {
    let mut literals = Vec::new();
    let mut comments = Vec::new();
    for tok in Lexer::new(script) {
        match tok.map_err(|e| anyhow!("generated script does not scan: {e}"))? {
            Token::Str(s) => literals.push(s),
            Token::Comment(c) => comments.push(c),
            Token::Eof => {}
        }
    }

    let loaded = format!("{output_name}{LOADED_SUFFIX}");
    if !literals.iter().any(|l| *l == loaded) {
        return Err(anyhow!("load message does not decode to `{loaded}`"));
    }

    let shown = escape::comment_text(output_name);
    for prefix in [HEADER_NAME, HEADER_ID] {
        // the lexer strips the leading `--`
        let wanted = format!("{}{}", &prefix[2..], shown);
        let hits = comments.iter().filter(|c| **c == wanted).count();
        if hits != 1 {
            return Err(anyhow!(
                "expected one `{}` header line, found {hits}",
                prefix.trim_end()
            ));
        }
    }
    Ok(())
}
