//! Minification for emitted JS and CSS.
//!
//! Uses oxc for JavaScript and lightningcss for CSS. Both are deterministic,
//! so minified output is as byte-stable as the source.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    JavaScript,
    Css,
}

impl AssetKind {
    fn name(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Css => "css",
        }
    }
}

/// Minify JavaScript source code.
pub fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

/// Minify when `enabled`, keeping the original text if the minifier rejects it.
pub fn minify_or_keep(kind: AssetKind, source: String, enabled: bool) -> String {
    if !enabled {
        return source;
    }
    let minified = match kind {
        AssetKind::JavaScript => minify_js(&source),
        AssetKind::Css => minify_css(&source),
    };
    minified.unwrap_or_else(|| {
        log!("minify"; "{} minifier rejected input, emitting unminified", kind.name());
        source
    })
}
