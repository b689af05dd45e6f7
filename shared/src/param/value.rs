use std::fmt;

/// The four parameter kinds the animation player understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Bool,
    Trigger,
    Float,
    Int,
}

impl ParamKind {
    /// The value cells of this kind hold before anything is written.
    pub const fn zero_value(&self) -> ParamValue {
        match self {
            ParamKind::Bool => ParamValue::Bool(false),
            ParamKind::Trigger => ParamValue::Trigger(false),
            ParamKind::Float => ParamValue::Float(0.0),
            ParamKind::Int => ParamValue::Int(0),
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ParamKind::Bool => "Bool",
            ParamKind::Trigger => "Trigger",
            ParamKind::Float => "Float",
            ParamKind::Int => "Int",
        };
        write!(f, "{}", name)
    }
}

/// A typed parameter payload.
///
/// Kind and payload travel together, so a reader can never interpret a
/// payload through the wrong lens. The consumer dispatches on the variant
/// it receives; whether that variant matches the schema's declared kind is
/// the writer's responsibility (see [`ValueCell::write`](crate::ValueCell::write)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    /// One-shot pulse. `true` raises the trigger, `false` clears it.
    Trigger(bool),
    Float(f32),
    Int(i32),
}

impl ParamValue {
    pub const fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Bool(_) => ParamKind::Bool,
            ParamValue::Trigger(_) => ParamKind::Trigger,
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Int(_) => ParamKind::Int,
        }
    }
}
