use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use snvscore_core::models::parse_base;
use snvscore_core::utils::{get_dynamic_reader, guess_delimiter};

use crate::consts::{FUNC_CLASS, LOF_CLASS};

///
/// Functional class of a calibration variant. Functional and intermediate
/// variants are pooled into one class.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantClass {
    Lof,
    FuncInt,
}

impl VariantClass {
    pub fn is_lof(&self) -> bool {
        matches!(self, VariantClass::Lof)
    }
}

impl FromStr for VariantClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "LOF" => Ok(VariantClass::Lof),
            "FUNC" | "INT" | "FUNC/INT" => Ok(VariantClass::FuncInt),
            other => anyhow::bail!("Unknown variant class: {}", other),
        }
    }
}

impl Display for VariantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantClass::Lof => write!(f, "{}", LOF_CLASS),
            VariantClass::FuncInt => write!(f, "{}", FUNC_CLASS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledVariant {
    pub chrom: String,
    /// 1-based
    pub pos: u64,
    pub reference: char,
    pub alt: char,
    pub class: VariantClass,
}

/// Column indexes of the fields we need, resolved from the header.
struct Columns {
    chrom: usize,
    pos: usize,
    reference: usize,
    alt: usize,
    class: usize,
}

impl Columns {
    fn from_header(header: &[&str]) -> Result<Self> {
        let find = |names: &[&str]| -> Result<usize> {
            header
                .iter()
                .position(|h| names.contains(&h.trim().to_lowercase().as_str()))
                .with_context(|| format!("Missing column, expected one of {:?}", names))
        };

        Ok(Columns {
            chrom: find(&["chrom", "chromosome"])?,
            pos: find(&["pos", "position", "position (hg19)", "position (hg38)"])?,
            reference: find(&["ref", "reference"])?,
            alt: find(&["alt", "alternative"])?,
            class: find(&["class", "func.class"])?,
        })
    }
}

///
/// Read a delimited (tab or comma) table of labelled variants. The file may
/// be gzipped. Required columns: `chrom`, `pos`, `ref`, `alt`, `class`;
/// anything else is ignored.
///
/// # Arguments
///
/// - path: path to the table
/// - limit: only read the first `limit` variants
///
pub fn read_variant_table<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<Vec<LabeledVariant>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => anyhow::bail!("Variant table is empty: {}", path.display()),
    };
    let delimiter = guess_delimiter(&header);
    let columns = Columns::from_header(&header.split(delimiter).collect::<Vec<&str>>())?;

    let mut variants = Vec::new();
    for (i, line) in lines.enumerate() {
        if limit.is_some_and(|limit| variants.len() >= limit) {
            break;
        }

        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        // header is line 1
        let line_no = i + 2;
        let fields: Vec<&str> = line.split(delimiter).collect();
        let field = |idx: usize| -> Result<&str> {
            fields
                .get(idx)
                .map(|f| f.trim())
                .with_context(|| format!("Line {}: too few columns", line_no))
        };

        let pos: u64 = field(columns.pos)?
            .parse()
            .with_context(|| format!("Line {}: invalid position", line_no))?;
        if pos == 0 {
            anyhow::bail!("Line {}: positions are 1-based", line_no);
        }

        variants.push(LabeledVariant {
            chrom: field(columns.chrom)?.to_string(),
            pos,
            reference: parse_base(field(columns.reference)?)
                .with_context(|| format!("Line {}: invalid reference base", line_no))?,
            alt: parse_base(field(columns.alt)?)
                .with_context(|| format!("Line {}: invalid alternative base", line_no))?,
            class: field(columns.class)?
                .parse()
                .with_context(|| format!("Line {}: invalid class", line_no))?,
        });
    }

    Ok(variants)
}
