use std::fmt;

/// Wraps passenger-identifying text so it can be handed to `tracing` without
/// leaking it. Display and Debug keep the first letter of each word only,
/// e.g. `John Doe` renders as `J*** D**`.
#[derive(Clone)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    fn masked(&self) -> String {
        self.0
            .as_ref()
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        let hidden = chars.count();
                        format!("{}{}", first, "*".repeat(hidden))
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Masked({:?})", self.masked())
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
