use super::Val;
use std::collections::HashMap;
use std::rc::Rc;

/// ## Variable memory
///
/// One flat namespace for the whole run. Unlike classic BASIC there are
/// no default values; an unset name is simply absent.

#[derive(Debug, Default, Clone)]
pub struct Var {
    vars: HashMap<Rc<str>, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn fetch(&self, var_name: &str) -> Option<&Val> {
        self.vars.get(var_name)
    }

    pub fn store(&mut self, var_name: &str, value: Val) {
        match self.vars.get_mut(var_name) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(var_name.into(), value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
