//! Naming conventions for generated artifacts
//!
//! A module is addressed by a raw, possibly nested name such as `Shop/Order`
//! or `invoice_items`. Everything the generators need (class names, table
//! names, route prefixes, variable names) is derived from the last path
//! segment of that name.
//!
//! Derivation never fails: degenerate input yields degenerate (possibly
//! empty) output.

use inflector::Inflector;
use std::fmt;

/// A normalised module name
///
/// Both `/` and `\` are accepted as separators. Segments are trimmed and
/// empty segments dropped, so `" Shop\\Order/ "` and `"Shop/Order"` are the
/// same module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName {
    segments: Vec<String>,
}

impl ModuleName {
    /// Parse a raw module name as given on the command line
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(ToString::to_string)
            .collect();

        Self { segments }
    }

    /// Returns true when the name has no usable segment
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment that would leave the module tree when joined onto it
    ///
    /// `.` and `..` segments and drive prefixes such as `C:` are rejected.
    /// Leading separators never produce a segment, so they are harmless.
    #[must_use]
    pub fn escaping_segment(&self) -> Option<&str> {
        self.segments
            .iter()
            .map(String::as_str)
            .find(|segment| matches!(*segment, "." | "..") || segment.contains(':'))
    }

    /// Number of nested directories the module occupies
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Path segments in order
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, the part names are derived from
    #[must_use]
    pub fn basename(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Module as a relative path (`Shop/Order`)
    #[must_use]
    pub fn as_path(&self) -> String {
        self.segments.join("/")
    }

    /// Module as a PHP namespace fragment (`Shop\Order`)
    #[must_use]
    pub fn namespace(&self) -> String {
        self.segments.join("\\")
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path())
    }
}

/// Every name derived from a module's basename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Studly form of the basename (`InvoiceItems`)
    pub class_name: String,
    /// Singular model class (`InvoiceItem`)
    pub model_name: String,
    /// Plural `snake_case` table (`invoice_items`)
    pub table_name: String,
    /// Plural kebab-case route prefix (`invoice-items`)
    pub route_prefix: String,
    /// Model name with a lower-cased first letter (`invoiceItem`)
    pub variable_name: String,
}

impl DerivedNames {
    /// Derive all names for a module
    ///
    /// # Examples
    ///
    /// ```
    /// # use module_maker::scaffold::names::{DerivedNames, ModuleName};
    /// let names = DerivedNames::derive(&ModuleName::parse("invoice_items"));
    /// assert_eq!(names.class_name, "InvoiceItems");
    /// assert_eq!(names.model_name, "InvoiceItem");
    /// assert_eq!(names.table_name, "invoice_items");
    /// assert_eq!(names.route_prefix, "invoice-items");
    /// assert_eq!(names.variable_name, "invoiceItem");
    /// ```
    #[must_use]
    pub fn derive(module: &ModuleName) -> Self {
        let basename = module.basename();
        let model_name = NameHelpers::singular_studly(basename);

        Self {
            class_name: NameHelpers::studly(basename),
            table_name: NameHelpers::plural_joined(&model_name, "_"),
            route_prefix: NameHelpers::plural_joined(&model_name, "-"),
            variable_name: NameHelpers::lcfirst(&model_name),
            model_name,
        }
    }
}

/// Singular and plural pairs Inflector's rules get wrong (`person` -> `personople`)
const IRREGULAR_NOUNS: [(&str, &str); 10] = [
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("ox", "oxen"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
];

/// Nouns whose singular and plural are the same word
const UNCOUNTABLE_NOUNS: [&str; 9] = [
    "deer",
    "equipment",
    "fish",
    "information",
    "news",
    "series",
    "sheep",
    "species",
    "staff",
];

/// String transforms behind [`DerivedNames`]
///
/// Inflection is applied to the final word only, so `InvoiceItems` becomes
/// `InvoiceItem` rather than being treated as a single opaque word.
pub struct NameHelpers;

impl NameHelpers {
    /// Split into lower-case words (`HTTPRequest` -> `["http", "request"]`)
    #[must_use]
    pub fn words(input: &str) -> Vec<String> {
        input
            .to_snake_case()
            .split('_')
            .filter(|word| !word.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Capitalise each word and join (`blog_post` -> `BlogPost`)
    #[must_use]
    pub fn studly(input: &str) -> String {
        Self::words(input).join("_").to_pascal_case()
    }

    /// Studly form with the last word singularised (`invoice_items` -> `InvoiceItem`)
    #[must_use]
    pub fn singular_studly(input: &str) -> String {
        let mut words = Self::words(input);
        if let Some(last) = words.last_mut() {
            *last = Self::singular_word(last);
        }
        words.join("_").to_pascal_case()
    }

    /// Lower-case words joined by `separator`, last word pluralised
    ///
    /// ```
    /// # use module_maker::scaffold::names::NameHelpers;
    /// assert_eq!(NameHelpers::plural_joined("UserProfile", "_"), "user_profiles");
    /// assert_eq!(NameHelpers::plural_joined("Category", "-"), "categories");
    /// ```
    #[must_use]
    pub fn plural_joined(input: &str, separator: &str) -> String {
        let mut words = Self::words(input);
        if let Some(last) = words.last_mut() {
            *last = Self::plural_word(last);
        }
        words.join(separator)
    }

    /// Singular of one lower-case word
    #[must_use]
    pub fn singular_word(word: &str) -> String {
        if UNCOUNTABLE_NOUNS.contains(&word) {
            return word.to_string();
        }
        if let Some((singular, _)) = IRREGULAR_NOUNS
            .iter()
            .find(|(singular, plural)| *singular == word || *plural == word)
        {
            return (*singular).to_string();
        }
        word.to_singular()
    }

    /// Plural of one lower-case word
    ///
    /// Words that are already plural come back unchanged.
    #[must_use]
    pub fn plural_word(word: &str) -> String {
        if UNCOUNTABLE_NOUNS.contains(&word) {
            return word.to_string();
        }
        if let Some((_, plural)) = IRREGULAR_NOUNS
            .iter()
            .find(|(singular, plural)| *singular == word || *plural == word)
        {
            return (*plural).to_string();
        }

        let plural = word.to_plural();
        if plural != word && plural.starts_with(word) {
            let singular = word.to_singular();
            if singular != word && singular.to_plural() == word {
                return word.to_string();
            }
        }
        plural
    }

    /// Lower-case the first character only
    #[must_use]
    pub fn lcfirst(input: &str) -> String {
        let mut chars = input.chars();
        chars
            .next()
            .map(|first| first.to_lowercase().chain(chars).collect())
            .unwrap_or_default()
    }
}
