use std::collections::BTreeMap;

use super::Placeholder;

/// Values for the placeholders a template is known to use
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: BTreeMap<Placeholder, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.values.insert(placeholder, value.into());
        self
    }

    pub fn file(self, value: impl Into<String>) -> Self {
        self.with(Placeholder::File, value)
    }

    pub fn out_dir(self, value: impl Into<String>) -> Self {
        self.with(Placeholder::OutDir, value)
    }

    pub fn out(self, value: impl Into<String>) -> Self {
        self.with(Placeholder::Out, value)
    }

    pub fn workspace(self, value: impl Into<String>) -> Self {
        self.with(Placeholder::Workspace, value)
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    pub fn is_bound(&self, placeholder: Placeholder) -> bool {
        self.values.contains_key(&placeholder)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.values.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_binding_replaces_earlier() {
        let bindings = Bindings::new().file("/old.c").file("/new.c");
        assert_eq!(bindings.get(Placeholder::File), Some("/new.c"));
        assert!(!bindings.is_bound(Placeholder::Out));
        assert_eq!(bindings.iter().count(), 1);
    }
}
