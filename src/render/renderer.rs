//! Block-level rendering.
//!
//! The body is walked line by line. At most one block is open at a time
//! (paragraph, list, quote or code fence); starting a different kind of block
//! or reaching a blank line closes it. Rules, headings and tables are emitted
//! as soon as they are recognised.

use super::block::{Align, Block, Heading, ListKind, RenderedDocument};
use super::slug::{SlugAllocator, DEFAULT_MAX_SLUG_LEN};

/// The block currently accumulating lines.
#[derive(Debug, Default)]
enum OpenBlock {
    #[default]
    None,
    Paragraph(Vec<String>),
    List { kind: ListKind, items: Vec<String> },
    Quote(Vec<String>),
    Fence { lang: String, lines: Vec<String> },
}

impl OpenBlock {
    fn close(self) -> Option<Block> {
        match self {
            OpenBlock::None => None,
            OpenBlock::Paragraph(lines) => Some(Block::Paragraph(lines.join(" ").trim().to_string())),
            OpenBlock::List { kind, items } => Some(Block::List { kind, items }),
            OpenBlock::Quote(lines) => Some(Block::Quote(lines)),
            OpenBlock::Fence { lang, lines } => Some(Block::Code {
                lang,
                text: lines.join("\n"),
            }),
        }
    }
}

/// State of one render pass.
struct Pass {
    blocks: Vec<Block>,
    toc: Vec<Heading>,
    open: OpenBlock,
    slugs: SlugAllocator,
}

impl Pass {
    fn flush(&mut self) {
        if let Some(block) = std::mem::take(&mut self.open).close() {
            self.blocks.push(block);
        }
    }

    fn emit(&mut self, block: Block) {
        self.flush();
        self.blocks.push(block);
    }

    fn heading(&mut self, level: u8, text: &str) {
        let heading = Heading {
            level,
            text: text.to_string(),
            id: self.slugs.allocate(text),
        };
        self.toc.push(heading.clone());
        self.emit(Block::Heading(heading));
    }

    fn quote_line(&mut self, text: &str) {
        match &mut self.open {
            OpenBlock::Quote(lines) => lines.push(text.to_string()),
            _ => {
                self.flush();
                self.open = OpenBlock::Quote(vec![text.to_string()]);
            }
        }
    }

    fn list_item(&mut self, kind: ListKind, text: &str) {
        match &mut self.open {
            OpenBlock::List { kind: open_kind, items } if *open_kind == kind => {
                items.push(text.to_string());
            }
            _ => {
                self.flush();
                self.open = OpenBlock::List {
                    kind,
                    items: vec![text.to_string()],
                };
            }
        }
    }

    fn paragraph_line(&mut self, text: &str) {
        match &mut self.open {
            OpenBlock::Paragraph(lines) => lines.push(text.to_string()),
            _ => {
                self.flush();
                self.open = OpenBlock::Paragraph(vec![text.to_string()]);
            }
        }
    }

    fn finish(mut self) -> RenderedDocument {
        self.flush();
        RenderedDocument {
            blocks: self.blocks,
            toc: self.toc,
        }
    }
}

/// Renders document bodies into blocks and a table of contents.
#[derive(Debug, Clone, Copy)]
pub struct BlockRenderer {
    slug_max_len: usize,
}

impl Default for BlockRenderer {
    fn default() -> Self {
        Self {
            slug_max_len: DEFAULT_MAX_SLUG_LEN,
        }
    }
}

impl BlockRenderer {
    pub fn new(slug_max_len: usize) -> Self {
        Self { slug_max_len }
    }

    pub fn render(&self, body: &str) -> RenderedDocument {
        let normalized = body.replace("\r\n", "\n").replace('\r', "\n");
        let lines: Vec<&str> = normalized.split('\n').collect();

        let mut pass = Pass {
            blocks: Vec::new(),
            toc: Vec::new(),
            open: OpenBlock::None,
            slugs: SlugAllocator::new(self.slug_max_len),
        };

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];
            let trimmed = line.trim();
            i += 1;

            if let Some(lang) = fence_lang(line) {
                let closing = matches!(pass.open, OpenBlock::Fence { .. });
                pass.flush();
                if !closing {
                    pass.open = OpenBlock::Fence {
                        lang: lang.to_string(),
                        lines: Vec::new(),
                    };
                }
                continue;
            }
            if let OpenBlock::Fence { lines: fenced, .. } = &mut pass.open {
                fenced.push(line.to_string());
                continue;
            }

            if trimmed.is_empty() {
                pass.flush();
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix('>') {
                let text = rest.strip_prefix(|c: char| c.is_whitespace()).unwrap_or(rest);
                pass.quote_line(text);
                continue;
            }

            if is_rule(trimmed) {
                pass.emit(Block::Rule);
                continue;
            }

            if let Some((level, text)) = parse_heading(line) {
                pass.heading(level, text);
                continue;
            }

            if trimmed.contains('|') && lines.get(i).is_some_and(|next| is_table_separator(next)) {
                let header = split_row(line);
                let aligns = split_row(lines[i]).iter().map(|c| Align::from_separator(c)).collect();
                i += 1;

                let mut rows = Vec::new();
                while let Some(row) = lines.get(i) {
                    if row.trim().is_empty() || !row.contains('|') {
                        break;
                    }
                    let mut cells = split_row(row);
                    cells.resize(header.len(), String::new());
                    rows.push(cells);
                    i += 1;
                }

                pass.emit(Block::Table {
                    header,
                    aligns,
                    rows,
                });
                continue;
            }

            if let Some((kind, text)) = parse_list_item(line) {
                pass.list_item(kind, text);
                continue;
            }

            pass.paragraph_line(trimmed);
        }

        pass.finish()
    }
}

/// Render with default settings.
pub fn render_markdown(body: &str) -> RenderedDocument {
    BlockRenderer::default().render(body)
}

/// Language tag of a fence delimiter line, `Some("")` for a bare fence.
fn fence_lang(line: &str) -> Option<&str> {
    let tag = line.strip_prefix("```")?.trim();
    if tag.contains(char::is_whitespace) {
        None
    } else {
        Some(tag)
    }
}

fn is_rule(trimmed: &str) -> bool {
    ['-', '*', '_']
        .iter()
        .any(|&c| trimmed.len() >= 3 && trimmed.chars().all(|t| t == c))
}

/// `(level, text)` for ATX headings; closing hashes are dropped from the text.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = after_marker(&line[hashes..])?;
    let text = rest.trim();

    let without_closing = text.trim_end_matches('#');
    let text = if without_closing.len() < text.len() && without_closing.ends_with(char::is_whitespace) {
        without_closing.trim_end()
    } else {
        text
    };

    Some((hashes as u8, text))
}

/// After a block marker there must be whitespace followed by at least one
/// more character. Returns everything after the marker.
fn after_marker(rest: &str) -> Option<&str> {
    let first = rest.chars().next().filter(|c| c.is_whitespace())?;
    if rest[first.len_utf8()..].is_empty() {
        None
    } else {
        Some(rest)
    }
}

fn parse_list_item(line: &str) -> Option<(ListKind, &str)> {
    let line = line.trim_start();
    if let Some(rest) = line.strip_prefix(['-', '*']) {
        return after_marker(rest).map(|r| (ListKind::Unordered, r.trim()));
    }

    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    after_marker(rest).map(|r| (ListKind::Ordered, r.trim()))
}

fn is_table_separator(line: &str) -> bool {
    let trimmed = line.trim();
    if !trimmed.contains('|') {
        return false;
    }
    let mut cells = trimmed.split('|').map(str::trim).filter(|c| !c.is_empty()).peekable();
    cells.peek().is_some() && cells.all(is_separator_cell)
}

/// Matches `:?-{3,}:?`.
fn is_separator_cell(cell: &str) -> bool {
    let cell = cell.strip_prefix(':').unwrap_or(cell);
    let cell = cell.strip_suffix(':').unwrap_or(cell);
    cell.len() >= 3 && cell.bytes().all(|b| b == b'-')
}

fn split_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('|').unwrap_or(trimmed);
    trimmed.split('|').map(|c| c.trim().to_string()).collect()
}
