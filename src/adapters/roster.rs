use crate::domain::model::StudentRecord;
use crate::knowledge::normalize;
use crate::utils::error::{AdvisorError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use regex::Regex;
use std::io::{Cursor, Read};
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Nom",
    "Prénom",
    "Date de Naissance",
    "Lieu de Naissance",
    "Filière Actuelle",
    "Carrière Envisagée",
];

const DOCUMENT_XML: &str = "word/document.xml";

/// Largest roster accepted, in bytes.
pub const MAX_ROSTER_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Xlsx,
    Csv,
    Tsv,
    Docx,
    Text,
}

impl RosterFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" => Ok(RosterFormat::Xlsx),
            "csv" => Ok(RosterFormat::Csv),
            "tsv" => Ok(RosterFormat::Tsv),
            "docx" => Ok(RosterFormat::Docx),
            "txt" => Ok(RosterFormat::Text),
            _ => Err(AdvisorError::UnsupportedFormatError { extension }),
        }
    }
}

/// Students read from one roster, plus the rows and tables that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterParse {
    pub students: Vec<StudentRecord>,
    pub warnings: Vec<String>,
}

impl RosterParse {
    fn accept(&mut self, student: StudentRecord, line: usize) {
        if student.is_complete() {
            self.students.push(student);
        } else {
            let warning = format!("Ligne {} ignorée: Nom ou Filière Actuelle manquant", line);
            tracing::warn!("⚠️ {}", warning);
            self.warnings.push(warning);
        }
    }
}

fn check_size(size: u64) -> Result<()> {
    if size > MAX_ROSTER_BYTES {
        return Err(AdvisorError::RosterError {
            message: format!(
                "Le fichier est trop volumineux ({} octets). Taille maximale: {} MB",
                size,
                MAX_ROSTER_BYTES / (1024 * 1024)
            ),
        });
    }
    Ok(())
}

pub fn parse_roster_file<P: AsRef<Path>>(path: P) -> Result<RosterParse> {
    let format = RosterFormat::from_path(&path)?;
    check_size(std::fs::metadata(&path)?.len())?;
    let bytes = std::fs::read(&path)?;
    parse_roster(&bytes, format)
}

pub fn parse_roster(bytes: &[u8], format: RosterFormat) -> Result<RosterParse> {
    check_size(bytes.len() as u64)?;

    let parsed = match format {
        RosterFormat::Xlsx => parse_workbook(bytes)?,
        RosterFormat::Csv => parse_delimited(bytes, b',')?,
        RosterFormat::Tsv => parse_delimited(bytes, b'\t')?,
        RosterFormat::Docx => parse_docx(bytes)?,
        RosterFormat::Text => parse_text(&decode_utf8(bytes)?),
    };

    tracing::info!(
        "📋 Roster parsed: {} students, {} skipped entries",
        parsed.students.len(),
        parsed.warnings.len()
    );
    Ok(parsed)
}

fn decode_utf8(bytes: &[u8]) -> Result<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).map_err(|e| AdvisorError::RosterError {
        message: format!("Roster is not valid UTF-8: {}", e),
    })
}

/// Position of each required column in a header row, matched through `normalize`.
/// Returns the names of the missing columns on failure.
fn locate_columns<S: AsRef<str>>(headers: &[S]) -> std::result::Result<[usize; 6], Vec<String>> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize(h.as_ref())).collect();
    let mut positions = [0usize; 6];
    let mut missing = Vec::new();

    for (slot, required) in REQUIRED_COLUMNS.iter().enumerate() {
        let wanted = normalize(required);
        match normalized.iter().position(|header| *header == wanted) {
            Some(index) => positions[slot] = index,
            None => missing.push(required.to_string()),
        }
    }

    if missing.is_empty() {
        Ok(positions)
    } else {
        Err(missing)
    }
}

fn record_from_cells<S: AsRef<str>>(cells: &[S], columns: &[usize; 6]) -> StudentRecord {
    let cell = |slot: usize| {
        cells
            .get(columns[slot])
            .map(|value| value.as_ref().trim().to_string())
            .unwrap_or_default()
    };

    let intended = cell(5);
    StudentRecord {
        last_name: cell(0),
        first_name: cell(1),
        birth_date: cell(2),
        birth_place: cell(3),
        current_field: cell(4),
        intended_occupation: (!intended.is_empty()).then_some(intended),
    }
}

fn parse_delimited(bytes: &[u8], delimiter: u8) -> Result<RosterParse> {
    let content = decode_utf8(bytes)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let columns = locate_columns(&headers).map_err(|missing| AdvisorError::RosterError {
        message: format!("Colonnes manquantes: {}", missing.join(", ")),
    })?;

    let mut parsed = RosterParse::default();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let cells: Vec<&str> = row.iter().collect();
        // Header is line 1.
        parsed.accept(record_from_cells(&cells, &columns), index + 2);
    }

    Ok(parsed)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        _ => cell.to_string().trim().to_string(),
    }
}

fn workbook_error(e: impl std::fmt::Display) -> AdvisorError {
    AdvisorError::RosterError {
        message: format!("Classeur illisible: {}", e),
    }
}

/// First worksheet only; its first row holds the column headers.
fn parse_workbook(bytes: &[u8]) -> Result<RosterParse> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(workbook_error)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AdvisorError::RosterError {
            message: "Le classeur ne contient aucune feuille".to_string(),
        })?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(workbook_error)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let columns = locate_columns(&headers).map_err(|missing| AdvisorError::RosterError {
        message: format!("Colonnes manquantes: {}", missing.join(", ")),
    })?;

    let mut parsed = RosterParse::default();
    for (index, row) in rows.enumerate() {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        // Header is line 1.
        parsed.accept(record_from_cells(&cells, &columns), index + 2);
    }

    Ok(parsed)
}

fn pattern(source: &str) -> Result<Regex> {
    Regex::new(source).map_err(|e| AdvisorError::ProcessingError {
        message: format!("Invalid document pattern: {}", e),
    })
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Word XML fragments needed to read tables and paragraphs out of `document.xml`.
struct DocxPatterns {
    table: Regex,
    row: Regex,
    cell: Regex,
    paragraph: Regex,
    text: Regex,
}

impl DocxPatterns {
    fn new() -> Result<Self> {
        Ok(Self {
            table: pattern(r"(?s)<w:tbl(?:\s[^>]*)?>.*?</w:tbl>")?,
            row: pattern(r"(?s)<w:tr(?:\s[^>]*)?>.*?</w:tr>")?,
            cell: pattern(r"(?s)<w:tc(?:\s[^>]*)?>.*?</w:tc>")?,
            paragraph: pattern(r"(?s)<w:p(?:\s[^>]*)?/>|<w:p(?:\s[^>]*)?>.*?</w:p>")?,
            text: pattern(r"(?s)<w:t(?:\s[^>]*)?>(.*?)</w:t>")?,
        })
    }

    fn paragraph_text(&self, fragment: &str) -> String {
        let raw: String = self
            .text
            .captures_iter(fragment)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();
        unescape_xml(&raw)
    }

    fn paragraphs(&self, fragment: &str) -> Vec<String> {
        self.paragraph
            .find_iter(fragment)
            .map(|m| self.paragraph_text(m.as_str()))
            .collect()
    }

    fn cell_text(&self, cell: &str) -> String {
        self.paragraphs(cell).join("\n").trim().to_string()
    }
}

fn parse_docx(bytes: &[u8]) -> Result<RosterParse> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_XML)?.read_to_string(&mut xml)?;

    let patterns = DocxPatterns::new()?;
    let mut parsed = parse_docx_tables(&xml, &patterns);

    if parsed.students.is_empty() {
        tracing::debug!("No usable table in document, falling back to paragraph text");
        let body = patterns.table.replace_all(&xml, "");
        let fallback = parse_text_lines(patterns.paragraphs(&body));
        parsed.students = fallback.students;
        parsed.warnings.extend(fallback.warnings);
    }

    Ok(parsed)
}

fn parse_docx_tables(xml: &str, patterns: &DocxPatterns) -> RosterParse {
    let mut parsed = RosterParse::default();

    for table in patterns.table.find_iter(xml) {
        let rows: Vec<Vec<String>> = patterns
            .row
            .find_iter(table.as_str())
            .map(|row| {
                patterns
                    .cell
                    .find_iter(row.as_str())
                    .map(|cell| patterns.cell_text(cell.as_str()))
                    .collect()
            })
            .collect();

        if rows.len() < 2 {
            continue;
        }

        let columns = match locate_columns(&rows[0]) {
            Ok(columns) => columns,
            Err(missing) => {
                let warning = format!("Tableau ignoré - colonnes manquantes: {}", missing.join(", "));
                tracing::warn!("⚠️ {}", warning);
                parsed.warnings.push(warning);
                continue;
            }
        };

        for (index, row) in rows.iter().enumerate().skip(1) {
            parsed.accept(record_from_cells(row, &columns), index + 1);
        }
    }

    parsed
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    LastName,
    FirstName,
    BirthDate,
    BirthPlace,
    CurrentField,
    IntendedOccupation,
}

const FIELD_LABELS: [(&str, Field); 22] = [
    ("nom", Field::LastName),
    ("name", Field::LastName),
    ("prénom", Field::FirstName),
    ("prenom", Field::FirstName),
    ("firstname", Field::FirstName),
    ("date de naissance", Field::BirthDate),
    ("naissance", Field::BirthDate),
    ("né le", Field::BirthDate),
    ("birthdate", Field::BirthDate),
    ("lieu de naissance", Field::BirthPlace),
    ("lieu", Field::BirthPlace),
    ("né à", Field::BirthPlace),
    ("birthplace", Field::BirthPlace),
    ("filière", Field::CurrentField),
    ("filière actuelle", Field::CurrentField),
    ("filiere", Field::CurrentField),
    ("field", Field::CurrentField),
    ("carrière", Field::IntendedOccupation),
    ("carrière envisagée", Field::IntendedOccupation),
    ("carriere", Field::IntendedOccupation),
    ("career", Field::IntendedOccupation),
    ("métier", Field::IntendedOccupation),
];

/// Splits `Label: value` and resolves the label, ignoring case, accents and spacing.
fn labeled_value(line: &str) -> Option<(Field, &str)> {
    let (label, value) = line.split_once(':')?;
    let label = normalize(label);
    if label.is_empty() {
        return None;
    }

    FIELD_LABELS
        .iter()
        .find(|(alias, _)| normalize(alias) == label)
        .map(|(_, field)| (*field, value.trim()))
}

fn assign(student: &mut StudentRecord, field: Field, value: &str) {
    let value = value.to_string();
    match field {
        Field::LastName => student.last_name = value,
        Field::FirstName => student.first_name = value,
        Field::BirthDate => student.birth_date = value,
        Field::BirthPlace => student.birth_place = value,
        Field::CurrentField => student.current_field = value,
        Field::IntendedOccupation => {
            student.intended_occupation = (!value.is_empty()).then_some(value)
        }
    }
}

fn parse_text(content: &str) -> RosterParse {
    parse_text_lines(content.lines().map(str::to_string))
}

/// Blocks of `Label: value` lines separated by blank lines, one student per block.
fn parse_text_lines<I: IntoIterator<Item = String>>(lines: I) -> RosterParse {
    let mut parsed = RosterParse::default();
    let mut current: Option<(StudentRecord, usize)> = None;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            if let Some((student, start)) = current.take() {
                parsed.accept(student, start);
            }
            continue;
        }

        if let Some((field, value)) = labeled_value(line) {
            let (student, _) = current.get_or_insert_with(|| (StudentRecord::default(), index + 1));
            assign(student, field, value);
        }
    }

    if let Some((student, start)) = current {
        parsed.accept(student, start);
    }

    parsed
}

/// Counts and messages for a parsed roster, as shown before processing starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterReport {
    pub total_students: usize,
    pub valid_students: usize,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

pub fn validate_students(students: &[StudentRecord]) -> RosterReport {
    let mut report = RosterReport {
        total_students: students.len(),
        ..Default::default()
    };

    for (index, student) in students.iter().enumerate() {
        let label = format!("Étudiant {} ({})", index + 1, student.display_name());

        if student.last_name.trim().is_empty() {
            report.errors.push(format!("{}: Nom manquant", label));
            continue;
        }
        if student.current_field.trim().is_empty() {
            report.errors.push(format!("{}: Filière Actuelle manquante", label));
            continue;
        }
        if student.intended().is_none() {
            report
                .warnings
                .push(format!("{}: Carrière Envisagée manquante", label));
        }
        report.valid_students += 1;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::{FileOptions, ZipWriter};

    const CSV_ROSTER: &str = "Nom,Prénom,Date de Naissance,Lieu de Naissance,Filière Actuelle,Carrière Envisagée\n\
        Adjovi,Mireille,2004-03-12,Cotonou,Informatique,Développeur Web\n\
        ,Koffi,2003-01-01,Parakou,Droit,Avocat\n\
        Hounsa,Koffi,2005-07-30,Porto-Novo,Agronomie,\n";

    fn docx_with_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file::<_, ()>(DOCUMENT_XML, FileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    fn docx_row(cells: &[&str]) -> String {
        let cells: String = cells
            .iter()
            .map(|text| format!("<w:tc><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:tc>", text))
            .collect();
        format!("<w:tr>{}</w:tr>", cells)
    }

    fn docx_paragraph(text: &str) -> String {
        format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, text)
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(RosterFormat::from_path("a/b.CSV").unwrap(), RosterFormat::Csv);
        assert_eq!(RosterFormat::from_path("list.docx").unwrap(), RosterFormat::Docx);
        assert_eq!(RosterFormat::from_path("eleves.XLSX").unwrap(), RosterFormat::Xlsx);
        assert!(matches!(
            RosterFormat::from_path("list.pdf"),
            Err(AdvisorError::UnsupportedFormatError { extension }) if extension == "pdf"
        ));
    }

    fn workbook(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (row, cells) in rows.iter().enumerate() {
            for (col, text) in cells.iter().enumerate() {
                if !text.is_empty() {
                    sheet.write_string(row as u32, col as u16, *text).unwrap();
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    const HEADER: &[&str] = &[
        "Nom",
        "Prénom",
        "Date de Naissance",
        "Lieu de Naissance",
        "Filière Actuelle",
        "Carrière Envisagée",
    ];

    #[test]
    fn test_workbook_first_sheet_rows() {
        let bytes = workbook(&[
            HEADER,
            &["Adjovi", "Mireille", "2004-03-12", "Cotonou", "Informatique", "Développeur Web"],
            &["", "Koffi", "2003-01-01", "Parakou", "Droit", "Avocat"],
            &["", "", "", "", "", ""],
            &["Hounsa", "Koffi", "2005-07-30", "Porto-Novo", " Agronomie ", ""],
        ]);

        let parsed = parse_roster(&bytes, RosterFormat::Xlsx).unwrap();

        assert_eq!(parsed.students.len(), 2);
        assert_eq!(parsed.students[0].last_name, "Adjovi");
        assert_eq!(
            parsed.students[0].intended_occupation.as_deref(),
            Some("Développeur Web")
        );
        assert_eq!(parsed.students[1].current_field, "Agronomie");
        assert!(parsed.students[1].intended_occupation.is_none());
        assert_eq!(
            parsed.warnings,
            vec!["Ligne 3 ignorée: Nom ou Filière Actuelle manquant".to_string()]
        );
    }

    #[test]
    fn test_workbook_missing_columns() {
        let bytes = workbook(&[&["Nom", "Prénom"], &["Adjovi", "Mireille"]]);

        match parse_roster(&bytes, RosterFormat::Xlsx) {
            Err(AdvisorError::RosterError { message }) => {
                assert!(message.starts_with("Colonnes manquantes"));
                assert!(message.contains("Filière Actuelle"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_workbook_garbage_is_a_roster_error() {
        let err = parse_roster(b"not a workbook", RosterFormat::Xlsx).unwrap_err();
        assert!(matches!(err, AdvisorError::RosterError { .. }));
    }

    #[test]
    fn test_oversized_roster_is_rejected() {
        let bytes = vec![b' '; MAX_ROSTER_BYTES as usize + 1];
        let err = parse_roster(&bytes, RosterFormat::Csv).unwrap_err();
        match err {
            AdvisorError::RosterError { message } => assert!(message.contains("10 MB")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_oversized_roster_file_is_rejected_before_reading() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.as_file().set_len(MAX_ROSTER_BYTES + 1).unwrap();

        let err = parse_roster_file(file.path()).unwrap_err();
        assert!(matches!(err, AdvisorError::RosterError { .. }));
    }

    #[test]
    fn test_csv_rows_missing_name_are_skipped() {
        let parsed = parse_roster(CSV_ROSTER.as_bytes(), RosterFormat::Csv).unwrap();

        assert_eq!(parsed.students.len(), 2);
        assert_eq!(parsed.students[0].last_name, "Adjovi");
        assert_eq!(
            parsed.students[0].intended_occupation.as_deref(),
            Some("Développeur Web")
        );
        assert!(parsed.students[1].intended_occupation.is_none());
        assert_eq!(
            parsed.warnings,
            vec!["Ligne 3 ignorée: Nom ou Filière Actuelle manquant".to_string()]
        );
    }

    #[test]
    fn test_headers_match_without_accents_or_case() {
        let tsv = "nom\tprenom\tdate de naissance\tlieu de naissance\tFILIERE ACTUELLE\tcarriere envisagee\n\
            Dossou\tAline\t\t\tComptabilité\tComptable\n";
        let parsed = parse_roster(tsv.as_bytes(), RosterFormat::Tsv).unwrap();
        assert_eq!(parsed.students.len(), 1);
        assert_eq!(parsed.students[0].current_field, "Comptabilité");
    }

    #[test]
    fn test_missing_columns_reject_roster() {
        let csv = "Nom,Prénom\nAdjovi,Mireille\n";
        let err = parse_roster(csv.as_bytes(), RosterFormat::Csv).unwrap_err();
        match err {
            AdvisorError::RosterError { message } => {
                assert!(message.contains("Filière Actuelle"));
                assert!(message.contains("Carrière Envisagée"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_text_blocks_separated_by_blank_lines() {
        let text = "Nom: Adjovi\nPrénom: Mireille\nFilière: Informatique\nCarrière: Développeur Web\n\n\
            Nom: Sossa\nPrénom: Luc\n\n\
            nom : Hounsa\nFiliere actuelle: Agronomie\n";
        let parsed = parse_roster(text.as_bytes(), RosterFormat::Text).unwrap();

        assert_eq!(parsed.students.len(), 2);
        assert_eq!(parsed.students[0].first_name, "Mireille");
        assert_eq!(parsed.students[1].last_name, "Hounsa");
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].starts_with("Ligne 6 "));
    }

    #[test]
    fn test_first_name_label_does_not_overwrite_last_name() {
        let parsed = parse_text("Prénom: Mireille\nNom: Adjovi\nFilière: Informatique\n");
        assert_eq!(parsed.students[0].last_name, "Adjovi");
        assert_eq!(parsed.students[0].first_name, "Mireille");
    }

    #[test]
    fn test_docx_table() {
        let header = docx_row(&REQUIRED_COLUMNS);
        let good = docx_row(&["Adjovi", "Mireille", "", "Cotonou", "Informatique", "Analyste &amp; Data"]);
        let bad = docx_row(&["Sossa", "Luc", "", "", "", ""]);
        let body = format!("<w:tbl><w:tblPr/>{}{}{}</w:tbl>", header, good, bad);

        let parsed = parse_roster(&docx_with_body(&body), RosterFormat::Docx).unwrap();

        assert_eq!(parsed.students.len(), 1);
        assert_eq!(
            parsed.students[0].intended_occupation.as_deref(),
            Some("Analyste & Data")
        );
        assert_eq!(
            parsed.warnings,
            vec!["Ligne 3 ignorée: Nom ou Filière Actuelle manquant".to_string()]
        );
    }

    #[test]
    fn test_docx_falls_back_to_paragraphs() {
        let body = [
            docx_paragraph("Nom: Adjovi"),
            docx_paragraph("Prénom: Mireille"),
            docx_paragraph("Filière Actuelle: Informatique"),
            "<w:p/>".to_string(),
            docx_paragraph("Nom: Hounsa"),
            docx_paragraph("Filière: Tourisme"),
        ]
        .concat();

        let parsed = parse_roster(&docx_with_body(&body), RosterFormat::Docx).unwrap();

        assert_eq!(parsed.students.len(), 2);
        assert_eq!(parsed.students[1].current_field, "Tourisme");
    }

    #[test]
    fn test_validate_students() {
        let parsed = parse_roster(CSV_ROSTER.as_bytes(), RosterFormat::Csv).unwrap();
        let report = validate_students(&parsed.students);
        assert_eq!(report.total_students, 2);
        assert_eq!(report.valid_students, 2);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.errors.is_empty());
    }
}
