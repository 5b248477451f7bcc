//! Load or dump a (small) multigraph as an adjacency matrix in a text file.
//!
//! The format is :
//!  - the number of vertices n
//!  - n * n non negative integers, row by row.
//!
//! Values are separated by any whitespace (blanks, tabs, line breaks), so a row may be wrapped
//! over several lines. Lines beginning with # are skipped, as are empty lines.

use std::fs::OpenOptions;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{anyhow, Context};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::multigraph::Multigraph;

// whitespace separated tokens of a record, repeated blanks give empty fields and tabs stay inside fields
fn tokens(record: &StringRecord) -> impl Iterator<Item = &str> + '_ {
    record.iter().flat_map(|f| f.split_whitespace())
}

/// reads a multigraph from any reader
pub fn read_from<R: Read>(reader: R) -> anyhow::Result<Multigraph> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);
    //
    let mut nb_vertices: Option<usize> = None;
    let mut nb_values: usize = 0;
    // the count comes from the file, nothing is allocated from it
    let mut values = Vec::<i64>::new();
    let mut nb_extra: usize = 0;
    for record in rdr.records() {
        let record = record?;
        for token in tokens(&record) {
            match nb_vertices {
                None => {
                    let n = token
                        .parse::<usize>()
                        .with_context(|| format!("could not parse number of vertices {:?}", token))?;
                    nb_values = n
                        .checked_mul(n)
                        .ok_or_else(|| anyhow!("number of vertices {} too large", n))?;
                    log::debug!("read_from number of vertices : {}", n);
                    nb_vertices = Some(n);
                }
                Some(n) if values.len() < nb_values => {
                    let (row, col) = (values.len() / n, values.len() % n);
                    let value = token
                        .parse::<i64>()
                        .with_context(|| format!("row {} column {} : could not parse {:?}", row, col, token))?;
                    values.push(value);
                }
                Some(_) => {
                    nb_extra += 1;
                }
            }
        }
    } // end of loop on records
    //
    let nb_vertices = nb_vertices.ok_or_else(|| anyhow!("no number of vertices found"))?;
    if values.len() < nb_values {
        return Err(anyhow!(
            "truncated matrix, got {} values, expected {} for {} vertices",
            values.len(),
            nb_values,
            nb_vertices
        ));
    }
    if nb_extra > 0 {
        log::warn!("read_from ignoring {} values after the matrix", nb_extra);
    }
    //
    let rows: Vec<Vec<i64>> = if nb_vertices == 0 {
        Vec::new()
    } else {
        values.chunks(nb_vertices).map(|row| row.to_vec()).collect()
    };
    let graph = Multigraph::from_rows(rows)?;
    Ok(graph)
} // end of read_from

/// reads a multigraph from a file
pub fn read_multigraph(filepath: &Path) -> anyhow::Result<Multigraph> {
    log::info!("read_multigraph, loading file {:?}", filepath.as_os_str());
    let fileres = OpenOptions::new().read(true).open(filepath);
    if fileres.is_err() {
        log::error!("read_multigraph : could not open file {:?}", filepath.as_os_str());
        return Err(anyhow!("could not open file {:?}", filepath.as_os_str()));
    }
    let file = fileres?;
    read_from(BufReader::new(file)).with_context(|| format!("reading file {:?}", filepath.as_os_str()))
} // end of read_multigraph

/// dumps a multigraph to any writer
pub fn write_to<W: Write>(writer: W, graph: &Multigraph) -> anyhow::Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b' ')
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(&[graph.nb_vertices().to_string()])?;
    for row in graph.matrix().rows() {
        wtr.write_record(row.iter().map(|m| m.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
} // end of write_to

/// dumps a multigraph in a file, file is truncated if it exists
pub fn write_multigraph(filepath: &Path, graph: &Multigraph) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(filepath)
        .with_context(|| format!("could not open file {:?}", filepath.as_os_str()))?;
    write_to(BufWriter::new(file), graph)
} // end of write_multigraph

//========================================================================================

// end of mod tests
