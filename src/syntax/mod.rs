//! Minimal Zig syntax collaborator: a deterministic, side-effect-free
//! tokenizer and shallow tree with exactly the surface the analyzer
//! consumes (tokens, nodes with tags, locations, canonical re-rendering).

mod tokenizer;

pub use tokenizer::{Token, TokenKind};

/// 1-based source position; columns count Unicode code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// A parse problem with the byte offset where it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTag {
    /// `@import("...")` call; `target` is the token index of the string
    /// literal argument.
    ImportCall { target: usize },
    /// Bare data field at the top level of the file.
    ContainerField,
    FnDecl,
    VarDecl,
    TestDecl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub tag: NodeTag,
    pub main_token: usize,
}

/// Parsed view of one source file. Borrows the source buffer; owned
/// exclusively by the worker analyzing that file.
#[derive(Debug)]
pub struct Tree<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    nodes: Vec<Node>,
    errors: Vec<ParseError>,
    line_starts: Vec<usize>,
}

#[must_use]
pub fn parse(source: &str) -> Tree<'_> {
    let (tokens, errors) = tokenizer::tokenize(source);
    let nodes = build_nodes(source, &tokens);

    let mut line_starts = vec![0];
    for (i, b) in source.bytes().enumerate() {
        if b == b'\n' {
            line_starts.push(i + 1);
        }
    }

    Tree {
        source,
        tokens,
        nodes,
        errors,
        line_starts,
    }
}

impl<'a> Tree<'a> {
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn token_slice(&self, index: usize) -> &'a str {
        let token = &self.tokens[index];
        &self.source[token.start..token.end]
    }

    #[must_use]
    pub fn token_location(&self, index: usize) -> Location {
        self.location_at(self.tokens[index].start)
    }

    /// Resolve a byte offset to a 1-based line/column position.
    #[must_use]
    pub fn location_at(&self, offset: usize) -> Location {
        let line_idx = self.line_starts.partition_point(|&s| s <= offset) - 1;
        let line_start = self.line_starts[line_idx];
        let column = self.source[line_start..offset].chars().count() + 1;
        Location {
            line: line_idx + 1,
            column,
        }
    }

    /// Re-render the source in canonical form: LF line endings, no trailing
    /// whitespace, and exactly one trailing newline. Idempotent, and only
    /// meaningful when `errors()` is empty.
    #[must_use]
    pub fn render(&self) -> String {
        if self.source.is_empty() {
            return String::new();
        }

        let mut out = String::with_capacity(self.source.len() + 1);
        for line in self.source.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            out.push_str(line.trim_end());
            out.push('\n');
        }
        while out.ends_with("\n\n") {
            out.pop();
        }
        out
    }
}

/// Keywords that can begin (or modify) a top-level declaration.
fn decl_keyword(text: &str) -> Option<NodeTag> {
    match text {
        "fn" => Some(NodeTag::FnDecl),
        "const" | "var" => Some(NodeTag::VarDecl),
        "test" => Some(NodeTag::TestDecl),
        _ => None,
    }
}

fn is_decl_modifier(text: &str) -> bool {
    matches!(
        text,
        "pub" | "export"
            | "extern"
            | "inline"
            | "noinline"
            | "comptime"
            | "threadlocal"
            | "usingnamespace"
    )
}

fn is_keyword(text: &str) -> bool {
    decl_keyword(text).is_some()
        || is_decl_modifier(text)
        || matches!(
            text,
            "if" | "else"
                | "while"
                | "for"
                | "switch"
                | "return"
                | "break"
                | "continue"
                | "defer"
                | "errdefer"
                | "try"
                | "catch"
                | "orelse"
                | "and"
                | "or"
                | "struct"
                | "enum"
                | "union"
                | "error"
                | "opaque"
                | "packed"
                | "unreachable"
                | "undefined"
                | "null"
                | "true"
                | "false"
                | "anytype"
        )
}

fn next_meaningful(tokens: &[Token], mut index: usize) -> Option<usize> {
    while index < tokens.len() {
        if tokens[index].kind != TokenKind::Comment {
            return Some(index);
        }
        index += 1;
    }
    None
}

/// One linear pass over the token stream producing the flat node list:
/// every `@import("...")` call, plus a classification of each top-level
/// declaration (fields vs functions/constants/tests).
fn build_nodes(source: &str, tokens: &[Token]) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut depth = 0usize;
    let mut stmt_start = true;

    for (i, token) in tokens.iter().enumerate() {
        let text = &source[token.start..token.end];

        match token.kind {
            TokenKind::Comment => {}
            TokenKind::LParen | TokenKind::LBrace | TokenKind::LBracket => {
                depth += 1;
                stmt_start = false;
            }
            TokenKind::RParen | TokenKind::RBrace | TokenKind::RBracket => {
                depth = depth.saturating_sub(1);
                stmt_start = depth == 0;
            }
            TokenKind::Semicolon | TokenKind::Comma => {
                stmt_start = depth == 0;
            }
            TokenKind::Builtin => {
                if text == "@import"
                    && let Some(paren) = next_meaningful(tokens, i + 1)
                    && tokens[paren].kind == TokenKind::LParen
                    && let Some(arg) = next_meaningful(tokens, paren + 1)
                    && tokens[arg].kind == TokenKind::StringLiteral
                {
                    nodes.push(Node {
                        tag: NodeTag::ImportCall { target: arg },
                        main_token: i,
                    });
                }
                stmt_start = false;
            }
            TokenKind::Identifier if depth == 0 && stmt_start => {
                if let Some(tag) = decl_keyword(text) {
                    nodes.push(Node { tag, main_token: i });
                    stmt_start = false;
                } else if is_decl_modifier(text) {
                    // classification comes from the keyword that follows
                } else if !is_keyword(text)
                    && next_meaningful(tokens, i + 1)
                        .is_some_and(|next| tokens[next].kind == TokenKind::Colon)
                {
                    nodes.push(Node {
                        tag: NodeTag::ContainerField,
                        main_token: i,
                    });
                    stmt_start = false;
                } else {
                    stmt_start = false;
                }
            }
            _ => stmt_start = false,
        }
    }

    nodes
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
