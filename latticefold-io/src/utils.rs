use std::io::{BufRead, BufReader, Error, ErrorKind, Write, stdout, stderr};
use std::path::Path;
use std::fs::File;
use csv;
use csv::StringRecord;

/// Creates a `Writer` object.
///
/// Attempts to open a file under a given name. However, if the name is `"stdout"` or `"stderr"`,
/// the returned `Writer` will be connected to either `stdout` or `stderr` stream, respectively.
/// An empty file name also results in writing to `stdout`.
///
/// # Arguments
/// * `out_fname` - file name, `"stdout"` or `"stderr"`
/// * `if_append` - existing file will be removed if false, otherwise the new content will be appended
///
/// # Examples
///
/// ```
/// use std::fs;
/// use latticefold_io::out_writer;
/// let mut to_stream = out_writer("", true);
/// to_stream = out_writer("stdout", true);
/// assert!(fs::metadata("stdout").is_err());
/// let mut to_file = out_writer("file.out", false);
/// assert!(fs::metadata("file.out").is_ok());
/// # fs::remove_file("file.out").expect("Can't remove a test file: file.out");
/// ```
pub fn out_writer(out_fname: &str, if_append: bool) -> Box<dyn Write> {
    match out_fname {
        "" | "stdout" => Box::new(stdout()) as Box<dyn Write>,
        "stderr" => Box::new(stderr()) as Box<dyn Write>,
        _ => {
            let path = Path::new(out_fname);
            if if_append {
                let file = match File::options().append(true).write(true).create(true).open(path) {
                    Ok(file) => file,
                    Err(e) => panic!("can't open >{:?}<, error is: {:?}", &path, e),
                };
                Box::new(file) as Box<dyn Write>
            } else {
                let file = match File::create(path) {
                    Ok(file) => file,
                    Err(e) => panic!("can't open >{:?}<, error is: {:?}", &path, e),
                };
                Box::new(file) as Box<dyn Write>
            }
        }
    }
}

/// Reads values from a file in the tab-separated format.
///
/// # Example
/// ```
/// use std::io::BufReader;
/// use latticefold_io::read_tsv;
/// let txt_f64 = "1.0\t2.0\t3.0\t4.0
/// 5.0\t6.0\t7.0\t8.0
/// ";
/// let data_f64: Vec<Vec<f64>> = read_tsv(BufReader::new(txt_f64.as_bytes())).unwrap();
/// assert_eq!(data_f64.len(), 2);
/// assert_eq!(data_f64[0].len(), 4);
/// ```
pub fn read_tsv<T: std::str::FromStr, R: BufRead>(reader: R) -> Result<Vec<Vec<T>>, Error> { read_csv_tsv(reader, b'\t') }

/// Reads values from a file in the comma-separated format.
///
/// This function works as [read_tsv()], just with another delimiter.
pub fn read_csv<T: std::str::FromStr, R: BufRead>(reader: R) -> Result<Vec<Vec<T>>, Error> { read_csv_tsv(reader, b',') }

/// Checks that no field of the given record is empty.
fn is_record_ok(rec: &StringRecord) -> bool {
    rec.iter().all(|e| !e.is_empty())
}

fn read_csv_tsv<T: std::str::FromStr, R: BufRead>(reader: R, delimiter: u8) -> Result<Vec<Vec<T>>, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut data: Vec<Vec<T>> = Vec::new();
    for record in rdr.records() {
        if let Ok(r) = &record {
            if !is_record_ok(r) { continue; }

            let row: Result<Vec<T>, _> = r.iter().map(|e| e.parse::<T>()).collect();
            let row = match row {
                Ok(values) => values,
                Err(_err) => {
                    return Err(Error::new(ErrorKind::Other, format!("Problem while parsing a value; the last record was: {:?}", &record)));
                }
            };
            data.push(row);
        }
    }

    Ok(data)
}

/// Writes a table of named columns as tab-separated values: one `#`-prefixed header comment
/// line, then one row per entry.
///
/// # Arguments
/// * `out_fname` - destination, forwarded to [out_writer()]
/// * `headers` - column names, written as a single comment line
/// * `columns` - column data; all columns must have the same length
///
/// # Examples
/// ```
/// use latticefold_io::write_table;
/// write_table("stdout", &["energy", "gyration_radius"], &[vec![-1.0, -2.0], vec![0.5, 0.6]]).unwrap();
/// ```
pub fn write_table(out_fname: &str, headers: &[&str], columns: &[Vec<f64>]) -> Result<(), Error> {
    let mut stream = out_writer(out_fname, false);
    writeln!(stream, "#{}", headers.join("\t"))?;
    let n_rows = columns.first().map(|c| c.len()).unwrap_or(0);
    for row in 0..n_rows {
        let fields: Vec<String> = columns.iter().map(|c| format!("{:.6}", c[row])).collect();
        writeln!(stream, "{}", fields.join("\t"))?;
    }
    Ok(())
}

/// Opens a file for reading, returning a boxed buffered reader.
///
/// # Examples
/// ```no_run
/// use latticefold_io::open_file;
/// # use std::io;
/// # fn main() -> Result<(), io::Error> {
/// let reader = open_file("samples.tsv")?;
/// # Ok(())
/// # }
/// ```
pub fn open_file(filename: &str) -> Result<Box<dyn BufRead>, Error> {
    if filename.is_empty() {
        panic!("Couldn't open file - file name is an empty string!");
    }
    let path = Path::new(filename);
    let file = File::open(path)?;
    Ok(Box::new(BufReader::with_capacity(128 * 1024, file)))
}
