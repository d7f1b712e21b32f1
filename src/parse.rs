use crate::{config::Config, error::Error, source::SourceText};
use swc_core::common::{sync::Lrc, BytePos, FileName, SourceMap, Spanned};
use swc_core::ecma::{
    ast::{EsVersion, Module},
    parser::{parse_file_as_module, EsSyntax, Syntax},
};

const BOM: char = '\u{feff}';

/// A module parsed from standalone text.
pub struct ParsedModule {
    pub module: Module,
    /// Position SWC assigned to the first parsed byte.
    pub start_pos: BytePos,
    /// Bytes skipped ahead of the parsed text (a byte-order mark).
    pub leading: usize,
}

impl ParsedModule {
    /// Maps this module's spans onto `code`, the text it was parsed from.
    pub fn source_text<'s>(&self, code: &'s str) -> SourceText<'s> {
        SourceText::with_leading(code, self.start_pos, self.leading)
    }
}

/// Parses `code` with the module goal. A leading byte-order mark is kept out
/// of the parser so span positions stay aligned with the text that follows it.
/// Recoverable parser errors are logged and tolerated; a hard error is
/// returned as [`Error::Parse`].
pub fn parse_module(code: &str, config: &Config) -> Result<ParsedModule, Error> {
    let body = code.strip_prefix(BOM).unwrap_or(code);
    let leading = code.len() - body.len();

    let cm: Lrc<SourceMap> = Default::default();
    let fm = cm.new_source_file(Lrc::new(FileName::Anon), body.to_string());
    let syntax = Syntax::Es(EsSyntax {
        jsx: config.jsx,
        ..Default::default()
    });

    let mut recovered = vec![];
    let module = parse_file_as_module(&fm, syntax, EsVersion::EsNext, None, &mut recovered)
        .map_err(|err| Error::Parse {
            offset: err.span().lo.0.saturating_sub(fm.start_pos.0) as usize + leading,
            message: format!("{:?}", err.kind()),
        })?;
    for err in &recovered {
        tracing::debug!(kind = ?err.kind(), "recovered parse error");
    }

    Ok(ParsedModule {
        module,
        start_pos: fm.start_pos,
        leading,
    })
}
