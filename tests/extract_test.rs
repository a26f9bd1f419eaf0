//! Integration tests for record extraction.

use unresume::{
    extract_row, extract_rows, split_sections, ExtractOptions, ResumeExtractor, ResumeRecord,
    SectionKind, NO_CERTIFICATION_DATA,
};

const RESUME: &str = "\
RAHUL VERMA
Mumbai | rahul.verma@yahoo.com | +91-91234-56789

Summary
Data analyst with a focus on Python and Power BI dashboards.

Education
M.Sc CS, Mumbai University, 2021-2023, Percentage 81.2
B.Sc Computer Science | 2018-2021 | 7.9 CGPA
HSC | 2018
Score: 76%
SSC | 2016 | 89%

Work Experience
Data analyst intern, FinCorp: built Tableau and Power BI reports
Automated Excel pipelines with pandas

Academic Projects
Churn prediction using scikit-learn

Certifications
Google Data Analytics Professional Certificate
Microsoft Power BI Data Analyst PL-300
SQL

Achievements
• First prize, inter-college data hackathon
• Member of the coding club
• Ranked 3rd in university merit list

Personal Details
Date of Birth: 01/02/2000
";

#[test]
fn test_full_resume() {
    let record = extract_row(RESUME);

    assert_eq!(record.name, "Rahul Verma");
    assert_eq!(record.email, "rahul.verma@yahoo.com");
    assert_eq!(record.mobile, "9123456789");
    assert_eq!(
        record.skills,
        "excel, pandas, power bi, python, scikit-learn, sql, tableau"
    );
    assert_eq!(
        record.education,
        "10th 89%\n12th 76%\nM.Sc CS 81.2%\nB.Sc Computer Science 7.9 CGPA"
    );
    assert_eq!(
        record.certifications,
        "Google Data Analytics Professional Certificate\nMicrosoft Power BI Data Analyst PL-300"
    );
    assert_eq!(
        record.experience,
        "Work Experience\n\
         Data analyst intern, FinCorp: built Tableau and Power BI reports\n\
         Automated Excel pipelines with pandas"
    );
    assert_eq!(record.publications, "");
    assert_eq!(
        record.awards,
        "First prize, inter-college data hackathon\nRanked 3rd in university merit list"
    );
}

#[test]
fn test_every_field_is_a_string_and_certifications_never_empty() {
    let inputs = [
        "",
        "\n\n\n",
        "x",
        "Certifications\n",
        "🙂 unicode only ✓",
        "Awards:\nPublications:\nExperience:\n",
    ];
    for input in inputs {
        let record = extract_row(input);
        assert!(!record.certifications.is_empty(), "input {:?}", input);
    }
    assert_eq!(extract_row("Certifications\n").certifications, NO_CERTIFICATION_DATA);
}

#[test]
fn test_idempotent() {
    assert_eq!(extract_row(RESUME), extract_row(RESUME));
}

#[test]
fn test_no_headers_puts_everything_in_experience() {
    let text = "Jane Doe\nBuilt things at Acme for five years\n";
    let record = extract_row(text);
    assert_eq!(record.experience, text);
    assert_eq!(record.awards, "");
    assert_eq!(record.publications, "");
}

#[test]
fn test_coursework_stays_in_preceding_section() {
    let text = "Jane Doe\nExperience\nIntern at Acme\nCoursework\nData Structures\n";
    let record = extract_row(text);
    assert_eq!(
        record.experience,
        "Experience\nIntern at Acme\nCoursework\nData Structures"
    );
    assert_eq!(record.certifications, NO_CERTIFICATION_DATA);
}

#[test]
fn test_split_sections_order_and_slices() {
    let sections = split_sections(RESUME);
    let kinds: Vec<SectionKind> = sections.iter().map(|(kind, _)| kind).collect();
    assert_eq!(
        kinds,
        vec![
            SectionKind::Experience,
            SectionKind::Projects,
            SectionKind::Certifications,
            SectionKind::Awards,
            SectionKind::Publications,
        ]
    );
    assert_eq!(
        sections.get(SectionKind::Projects),
        "Academic Projects\nChurn prediction using scikit-learn"
    );
    assert!(sections
        .get(SectionKind::Awards)
        .ends_with("Date of Birth: 01/02/2000"));
}

#[test]
fn test_contact_examples() {
    assert_eq!(extract_row("Contact: 9876543210").mobile, "9876543210");
    assert_eq!(extract_row("+91 98765 43210").mobile, "9876543210");
    assert_eq!(extract_row("reach me at a.b@gmail.com").email, "a.b@gmail.com");
    assert_eq!(extract_row("a.b@company.io").email, "");
}

#[test]
fn test_education_school_levels_first() {
    let text = "MCA 2023 8.1 CGPA\nClass 12 2018 71%\nBCA 2021 68%\nClass 10 2016 90%\n";
    assert_eq!(
        extract_row(text).education,
        "10th 90%\n12th 71%\nMCA 8.1 CGPA\nBCA 68%"
    );
}

#[test]
fn test_batch_parallel_equals_sequential() {
    let texts: Vec<String> = (0..32)
        .map(|i| format!("Candidate Number{}\nc{}@gmail.com\n{}\n", i, i, RESUME))
        .collect();

    let parallel = ResumeExtractor::new(ExtractOptions::new()).unwrap();
    let sequential = ResumeExtractor::new(ExtractOptions::new().sequential()).unwrap();

    let a = parallel.extract_rows(&texts);
    let b = sequential.extract_rows(&texts);
    assert_eq!(a, b);
    assert_eq!(a.len(), 32);
    for (i, record) in a.iter().enumerate() {
        assert_eq!(record.email, format!("c{}@gmail.com", i));
    }
}

#[test]
fn test_extract_rows_empty() {
    let texts: [&str; 0] = [];
    assert!(extract_rows(&texts).is_empty());
}

#[test]
fn test_record_field_order() {
    let record = extract_row(RESUME);
    let names: Vec<&str> = record.fields().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, ResumeRecord::FIELD_NAMES.to_vec());
    assert_eq!(record.get("Mobile"), Some("9123456789"));
}
