//! Scripted player input.
use std::str::FromStr;

use combat_runtime::MenuButton;

/// One scripted menu press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptStep {
    Punch,
    Shoot,
    Heat,
    Run,
    Fight,
    Back,
    Items,
    Allies,
}

impl ScriptStep {
    pub fn button(self) -> MenuButton {
        match self {
            ScriptStep::Punch => MenuButton::Punch,
            ScriptStep::Shoot => MenuButton::Shoot,
            ScriptStep::Heat => MenuButton::Heat,
            ScriptStep::Run => MenuButton::Run,
            ScriptStep::Fight => MenuButton::Fight,
            ScriptStep::Back => MenuButton::Back,
            ScriptStep::Items => MenuButton::Items,
            ScriptStep::Allies => MenuButton::Allies,
        }
    }
}

impl FromStr for ScriptStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "punch" => Ok(ScriptStep::Punch),
            "shoot" => Ok(ScriptStep::Shoot),
            "heat" => Ok(ScriptStep::Heat),
            "run" => Ok(ScriptStep::Run),
            "fight" => Ok(ScriptStep::Fight),
            "back" => Ok(ScriptStep::Back),
            "items" => Ok(ScriptStep::Items),
            "allies" => Ok(ScriptStep::Allies),
            other => Err(format!("unknown script step '{other}'")),
        }
    }
}
