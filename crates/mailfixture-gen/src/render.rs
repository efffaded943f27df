use mailfixture_core::rules::{DEFAULT_CONST_NAME, DEFAULT_ENTRY_IMPORT};
use mailfixture_core::Entry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub entry_import: String,
    pub const_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            entry_import: DEFAULT_ENTRY_IMPORT.to_string(),
            const_name: DEFAULT_CONST_NAME.to_string(),
        }
    }
}

impl RenderOptions {
    /// Last segment of the import path, used as the struct name.
    pub fn type_name(&self) -> &str {
        self.entry_import
            .rsplit("::")
            .next()
            .unwrap_or(&self.entry_import)
    }
}

pub fn render_entry(entry: &Entry) -> String {
    render_literal("Entry", entry)
}

fn render_literal(type_name: &str, entry: &Entry) -> String {
    let fields = entry
        .fields()
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{type_name} {{ {fields} }}")
}

/// Renders the whole generated source file.
pub fn render_module(entries: &[Entry], options: &RenderOptions) -> String {
    let type_name = options.type_name();
    let content = entries
        .iter()
        .map(|entry| render_literal(type_name, entry))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "\nuse {import};\npub const {name}: [{type_name}; {amount}] = [\n{content}\n];\n",
        import = options.entry_import,
        name = options.const_name,
        amount = entries.len(),
    )
}
