//! AST visitor that discovers translation calls.
//!
//! Recognized forms, matching the gettext-style runtime the scanned
//! projects use:
//!
//! - `` t`Hello ${name}` `` — tagged template, singular
//! - `gettext("...")` — singular
//! - `` ngettext(msgid`${ n } item`, `${ n } items`, n) `` — plural
//! - any of the above behind a `c("ctx")` prefix, which sets the entry
//!   context: `` c("menu").t`File` ``, `c("menu").gettext("File")`
//!
//! Dynamic arguments (non-literal contexts, computed msgids) are skipped;
//! only statically known strings can land in a catalog.

use swc_common::SourceMap;
use swc_ecma_ast::{CallExpr, Callee, Expr, Lit, MemberProp, Module, TaggedTpl};
use swc_ecma_visit::{Visit, VisitWith};

use super::template::template_msgid;

const TAG_FN: &str = "t";
const GETTEXT_FN: &str = "gettext";
const NGETTEXT_FN: &str = "ngettext";
const MSGID_TAG: &str = "msgid";
const CONTEXT_FN: &str = "c";

/// A translation call discovered in one file, before filtering and
/// annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub context: String,
    pub msgid: String,
    pub msgid_plural: Option<String>,
    /// 1-based source line of the call.
    pub line: usize,
}

/// Collects [`RawMessage`]s from a module.
pub struct MessageVisitor<'a> {
    source_map: &'a SourceMap,
    pub messages: Vec<RawMessage>,
}

impl<'a> MessageVisitor<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        Self {
            source_map,
            messages: Vec::new(),
        }
    }

    /// Traverse a module and return the discovered messages in source order.
    pub fn extract(module: &Module, source_map: &'a SourceMap) -> Vec<RawMessage> {
        let mut visitor = Self::new(source_map);
        module.visit_with(&mut visitor);
        visitor.messages
    }

    fn line_of(&self, node: &CallExpr) -> usize {
        self.source_map.lookup_char_pos(node.span.lo).line
    }

    fn push_singular(&mut self, context: String, msgid: String, line: usize) {
        self.messages.push(RawMessage {
            context,
            msgid,
            msgid_plural: None,
            line,
        });
    }

    fn handle_call(&mut self, fn_name: &str, context: String, node: &CallExpr) {
        match fn_name {
            GETTEXT_FN => {
                if let Some(arg) = node.args.first()
                    && let Some(msgid) = self.string_value(&arg.expr)
                {
                    let line = self.line_of(node);
                    self.push_singular(context, msgid, line);
                }
            }
            NGETTEXT_FN => {
                let Some(msgid) = node.args.first().and_then(|a| self.msgid_value(&a.expr))
                else {
                    return;
                };
                let Some(plural) = node.args.get(1).and_then(|a| self.string_value(&a.expr))
                else {
                    return;
                };
                let line = self.line_of(node);
                self.messages.push(RawMessage {
                    context,
                    msgid,
                    msgid_plural: Some(plural),
                    line,
                });
            }
            _ => {}
        }
    }

    /// Literal string or template (with or without expressions).
    fn string_value(&self, expr: &Expr) -> Option<String> {
        match expr {
            Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|s| s.to_string()),
            Expr::Tpl(tpl) => template_msgid(tpl, self.source_map),
            _ => None,
        }
    }

    /// The singular argument of `ngettext`: a `` msgid`...` `` tagged
    /// template, or a plain string for callers that skip the tag.
    fn msgid_value(&self, expr: &Expr) -> Option<String> {
        if let Expr::TaggedTpl(tagged) = expr
            && let Expr::Ident(tag) = &*tagged.tag
            && tag.sym.as_str() == MSGID_TAG
        {
            return template_msgid(&tagged.tpl, self.source_map);
        }
        self.string_value(expr)
    }
}

/// The context from a `c("ctx")` call expression, if that is what `expr` is.
fn call_context(expr: &Expr) -> Option<String> {
    let Expr::Call(call) = expr else { return None };
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Ident(ident) = &**callee else {
        return None;
    };
    if ident.sym.as_str() != CONTEXT_FN {
        return None;
    }
    match call.args.first().map(|a| &*a.expr) {
        Some(Expr::Lit(Lit::Str(s))) => s.value.as_str().map(|s| s.to_string()),
        _ => None,
    }
}

impl Visit for MessageVisitor<'_> {
    fn visit_tagged_tpl(&mut self, node: &TaggedTpl) {
        let context = match &*node.tag {
            Expr::Ident(ident) if ident.sym.as_str() == TAG_FN => Some(String::new()),
            Expr::Member(member) => match &member.prop {
                MemberProp::Ident(prop) if prop.sym.as_str() == TAG_FN => {
                    call_context(&member.obj)
                }
                _ => None,
            },
            _ => None,
        };

        if let Some(context) = context
            && let Some(msgid) = template_msgid(&node.tpl, self.source_map)
        {
            let line = self.source_map.lookup_char_pos(node.span.lo).line;
            self.push_singular(context, msgid, line);
        }

        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(callee) = &node.callee {
            match &**callee {
                Expr::Ident(ident) => {
                    let name = ident.sym.as_str().to_string();
                    self.handle_call(&name, String::new(), node);
                }
                Expr::Member(member) => {
                    if let MemberProp::Ident(prop) = &member.prop
                        && let Some(context) = call_context(&member.obj)
                    {
                        let name = prop.sym.as_str().to_string();
                        self.handle_call(&name, context, node);
                    }
                }
                _ => {}
            }
        }
        node.visit_children_with(self);
    }
}
