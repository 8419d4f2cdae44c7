// Animator parameter graph

use std::collections::HashMap;
use std::fmt;

use log::{trace, warn};

use super::AnimatorError;

/// Named flags and triggers that select which animation plays.
///
/// This is the seam the character adapter writes through. Implementations
/// decide what an unknown name means; none of these calls can fail.
pub trait AnimationGraph {
    /// Set a boolean flag
    fn set_bool(&mut self, name: &str, value: bool);

    /// Read a boolean flag
    fn get_bool(&self, name: &str) -> bool;

    /// Fire a one-shot trigger
    fn set_trigger(&mut self, name: &str);
}

impl<T: AnimationGraph + ?Sized> AnimationGraph for &mut T {
    fn set_bool(&mut self, name: &str, value: bool) {
        (**self).set_bool(name, value);
    }

    fn get_bool(&self, name: &str) -> bool {
        (**self).get_bool(name)
    }

    fn set_trigger(&mut self, name: &str) {
        (**self).set_trigger(name);
    }
}

/// Kind of a declared animator parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Bool,
    Trigger,
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Trigger => f.write_str("trigger"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parameter {
    Bool(bool),
    /// A trigger stays pending until a state transition consumes it
    Trigger { pending: bool, fired: u32 },
}

impl Parameter {
    fn kind(&self) -> ParameterKind {
        match self {
            Self::Bool(_) => ParameterKind::Bool,
            Self::Trigger { .. } => ParameterKind::Trigger,
        }
    }
}

/// Parameter store backing an animation state machine
#[derive(Debug, Clone, Default)]
pub struct Animator {
    parameters: HashMap<String, Parameter>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a boolean parameter with its initial value
    pub fn with_bool(mut self, name: &str, initial: bool) -> Self {
        self.parameters.insert(name.to_string(), Parameter::Bool(initial));
        self
    }

    /// Declare a trigger parameter
    pub fn with_trigger(mut self, name: &str) -> Self {
        self.parameters.insert(
            name.to_string(),
            Parameter::Trigger {
                pending: false,
                fired: 0,
            },
        );
        self
    }

    /// Check that a parameter exists with the given kind
    pub fn require(&self, name: &str, kind: ParameterKind) -> Result<(), AnimatorError> {
        match self.kind_of(name) {
            Some(actual) if actual == kind => Ok(()),
            Some(actual) => Err(wrong_kind(name, kind, actual)),
            None => Err(AnimatorError::UnknownParameter(name.to_string())),
        }
    }

    /// Kind of a declared parameter
    pub fn kind_of(&self, name: &str) -> Option<ParameterKind> {
        self.parameters.get(name).map(Parameter::kind)
    }

    pub fn try_set_bool(&mut self, name: &str, value: bool) -> Result<(), AnimatorError> {
        match self.parameters.get_mut(name) {
            Some(Parameter::Bool(current)) => {
                if *current != value {
                    trace!("animator bool {} = {}", name, value);
                }
                *current = value;
                Ok(())
            }
            Some(other) => Err(wrong_kind(name, ParameterKind::Bool, other.kind())),
            None => Err(AnimatorError::UnknownParameter(name.to_string())),
        }
    }

    pub fn try_get_bool(&self, name: &str) -> Result<bool, AnimatorError> {
        match self.parameters.get(name) {
            Some(Parameter::Bool(value)) => Ok(*value),
            Some(other) => Err(wrong_kind(name, ParameterKind::Bool, other.kind())),
            None => Err(AnimatorError::UnknownParameter(name.to_string())),
        }
    }

    pub fn try_set_trigger(&mut self, name: &str) -> Result<(), AnimatorError> {
        match self.parameters.get_mut(name) {
            Some(Parameter::Trigger { pending, fired }) => {
                trace!("animator trigger {} fired", name);
                *pending = true;
                *fired += 1;
                Ok(())
            }
            Some(other) => Err(wrong_kind(name, ParameterKind::Trigger, other.kind())),
            None => Err(AnimatorError::UnknownParameter(name.to_string())),
        }
    }

    /// Take a pending trigger. Returns true if it was set.
    pub fn consume_trigger(&mut self, name: &str) -> bool {
        match self.parameters.get_mut(name) {
            Some(Parameter::Trigger { pending, .. }) => std::mem::take(pending),
            _ => false,
        }
    }

    /// Total number of times a trigger has been fired
    pub fn fire_count(&self, name: &str) -> u32 {
        match self.parameters.get(name) {
            Some(Parameter::Trigger { fired, .. }) => *fired,
            _ => 0,
        }
    }
}

fn wrong_kind(name: &str, expected: ParameterKind, actual: ParameterKind) -> AnimatorError {
    AnimatorError::WrongKind {
        name: name.to_string(),
        expected,
        actual,
    }
}

impl AnimationGraph for Animator {
    fn set_bool(&mut self, name: &str, value: bool) {
        if let Err(e) = self.try_set_bool(name, value) {
            warn!("{}", e);
        }
    }

    fn get_bool(&self, name: &str) -> bool {
        self.try_get_bool(name).unwrap_or_else(|e| {
            warn!("{}", e);
            false
        })
    }

    fn set_trigger(&mut self, name: &str) {
        if let Err(e) = self.try_set_trigger(name) {
            warn!("{}", e);
        }
    }
}
