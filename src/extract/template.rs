use swc_common::{SourceMap, SourceMapper, Spanned};
use swc_ecma_ast::{Expr, Tpl};

/// Render a template literal as catalog msgid text.
///
/// Static parts pass through; each `${expr}` becomes a `${ <source> }`
/// placeholder carrying the expression's source text, so the same call
/// site always produces the same msgid. Returns `None` when a quasi has
/// no cooked form (invalid escapes) or an expression's text cannot be
/// recovered — such templates are not extractable.
pub fn template_msgid(tpl: &Tpl, source_map: &SourceMap) -> Option<String> {
    let mut out = String::new();
    for (index, quasi) in tpl.quasis.iter().enumerate() {
        let cooked = quasi.cooked.as_ref()?;
        out.push_str(cooked.as_str()?);
        if let Some(expr) = tpl.exprs.get(index) {
            out.push_str("${ ");
            out.push_str(&expression_text(expr, source_map)?);
            out.push_str(" }");
        }
    }
    Some(out)
}

fn expression_text(expr: &Expr, source_map: &SourceMap) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        other => source_map
            .span_to_snippet(other.span())
            .ok()
            .map(|snippet| snippet.trim().to_string()),
    }
}
