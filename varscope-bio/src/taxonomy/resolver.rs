/// Resolution of raw lineage codes to display names
use super::table::TaxonomyTable;

/// Resolves lineage codes against a borrowed [`TaxonomyTable`].
///
/// Resolution order:
/// 1. the code is a key of the table: its mapped name
/// 2. the code already is a display name: the code itself
/// 3. the closest dotted ancestor that is a key (`BA.2.12.1` tries
///    `BA.2.12`, then `BA.2`, then `BA`)
/// 4. otherwise the code itself
///
/// Total over all strings and a pure function of the code and the table.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    table: &'a TaxonomyTable,
}

impl<'a> NameResolver<'a> {
    pub fn new(table: &'a TaxonomyTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a TaxonomyTable {
        self.table
    }

    pub fn resolve(&self, code: &str) -> String {
        if let Some(name) = self.table.get(code) {
            return name.to_string();
        }

        if self.table.is_display_name(code) {
            return code.to_string();
        }

        if let Some(name) = self.resolve_ancestor(code) {
            return name.to_string();
        }

        code.to_string()
    }

    /// Resolve every code, preserving order
    pub fn resolve_all<I, S>(&self, codes: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes.into_iter().map(|c| self.resolve(c.as_ref())).collect()
    }

    /// Most specific strict ancestor of `code` present in the table
    fn resolve_ancestor(&self, code: &str) -> Option<&'a str> {
        let parts: Vec<&str> = code.split('.').collect();

        // A code with N dots has ancestors of length N down to 1
        (1..parts.len()).rev().find_map(|depth| {
            let ancestor = parts[..depth].join(".");
            self.table.get(&ancestor)
        })
    }
}
