//! Ordered list of typed output sections.
//!
//! User text has no way into the output except through `Comment` or
//! `LuaString`, both of which escape on render.

use super::escape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Fixed text, emitted as is.
    Literal(&'static str),
    /// Plain base-10 integer.
    Number(i64),
    /// Text placed on a `--` comment line.
    Comment(String),
    /// Text placed inside a `"…"` literal; the quotes are part of the section.
    LuaString(String),
}

impl Section {
    fn render_into(&self, out: &mut String) {
        match self {
            Section::Literal(text) => out.push_str(text),
            Section::Number(v) => out.push_str(&v.to_string()),
            Section::Comment(text) => out.push_str(&escape::comment_text(text)),
            Section::LuaString(text) => {
                out.push('"');
                out.push_str(&escape::lua_string(text));
                out.push('"');
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    sections: Vec<Section>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lit(&mut self, text: &'static str) -> &mut Self {
        self.sections.push(Section::Literal(text));
        self
    }

    pub fn number(&mut self, value: i64) -> &mut Self {
        self.sections.push(Section::Number(value));
        self
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.sections.push(Section::Comment(text.to_string()));
        self
    }

    pub fn lua_string(&mut self, text: &str) -> &mut Self {
        self.sections.push(Section::LuaString(text.to_string()));
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            section.render_into(&mut out);
        }
        out
    }
}
