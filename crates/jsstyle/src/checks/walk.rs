use jsstyle_core::Statement;

/// Visits statements depth-first in source order, parents before children.
pub(crate) fn walk_statements<'a, F>(statements: &'a [Statement], visit: &mut F)
where
    F: FnMut(&'a Statement),
{
    for statement in statements {
        visit(statement);
        if let Some(body) = statement.nested_body() {
            walk_statements(body, visit);
        }
    }
}
