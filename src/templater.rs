const TOKEN_OPEN: &str = "{{";
const TOKEN_CLOSE: &str = "}}";

/// Insertion-ordered variable map shared by the pages of a sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<(String, String)>,
}

impl Variables {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets `name` to `value`. An existing entry keeps its position.
    pub fn set<S1: Into<String>, S2: Into<String>>(&mut self, name: S1, value: S2) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S1: Into<String>, S2: Into<String>> std::iter::FromIterator<(S1, S2)> for Variables {
    fn from_iter<I: IntoIterator<Item = (S1, S2)>>(iter: I) -> Self {
        let mut variables = Variables::new();
        for (name, value) in iter {
            variables.set(name, value);
        }
        variables
    }
}

/// The `{{name}}` tokens of a variable map paired with their values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    tokens: Vec<String>,
    values: Vec<String>,
}

impl Replacements {
    pub fn from_variables(variables: &Variables) -> Self {
        let (tokens, values) = variables
            .iter()
            .map(|(name, value)| {
                (
                    format!("{}{}{}", TOKEN_OPEN, name, TOKEN_CLOSE),
                    String::from(value),
                )
            })
            .unzip();

        Self { tokens, values }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Replaces every known token in `text` with its value.
    ///
    /// The text is scanned once from left to right; inserted values are never scanned again, so a
    /// value containing `{{other}}` is left as is.
    pub fn substitute(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(position) = rest.find(TOKEN_OPEN) {
            output.push_str(&rest[..position]);
            let candidate = &rest[position..];

            match self
                .tokens
                .iter()
                .position(|token| candidate.starts_with(token.as_str()))
            {
                Some(index) => {
                    output.push_str(&self.values[index]);
                    rest = &candidate[self.tokens[index].len()..];
                }
                None => {
                    output.push('{');
                    rest = &candidate[1..];
                }
            }
        }

        output.push_str(rest);
        output
    }

    pub fn substitute_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|text| self.substitute(text))
    }

    pub fn substitute_all(&self, texts: Option<&[String]>) -> Option<Vec<String>> {
        texts.map(|texts| texts.iter().map(|text| self.substitute(text)).collect())
    }
}

/// Live variables of a sequence together with the replacement table derived from them.
///
/// Writes through [`Templater::set_variable`] only become visible to substitutions after the
/// next [`Templater::rebuild_replacements`].
#[derive(Debug, Clone, Default)]
pub struct Templater {
    variables: Variables,
    replacements: Replacements,
}

impl Templater {
    pub fn new(variables: Variables) -> Self {
        let replacements = Replacements::from_variables(&variables);
        Self {
            variables,
            replacements,
        }
    }

    pub fn reset(&mut self, variables: &Variables) {
        self.variables = variables.clone();
        self.rebuild_replacements();
    }

    pub fn rebuild_replacements(&mut self) {
        self.replacements = Replacements::from_variables(&self.variables);
    }

    pub fn set_variable<S1: Into<String>, S2: Into<String>>(&mut self, name: S1, value: S2) {
        self.variables.set(name, value);
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn replacements(&self) -> &Replacements {
        &self.replacements
    }

    pub fn substitute(&self, text: &str) -> String {
        self.replacements.substitute(text)
    }

    pub fn substitute_opt(&self, text: Option<&str>) -> Option<String> {
        self.replacements.substitute_opt(text)
    }

    pub fn substitute_all(&self, texts: Option<&[String]>) -> Option<Vec<String>> {
        self.replacements.substitute_all(texts)
    }
}
