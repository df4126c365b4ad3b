use anyhow::bail;
use colored::Colorize;

use scf_cell::{forest, Cell, Chunk};
use scf_types::{BoundingBox, HashTriple, Table};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Demo(args) => cmd_demo(args),
        Command::Hash(args) => cmd_hash(args),
    }
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let document = build_report_document()?;
    let docs = vec![document];

    let intro = &docs[0].children[0];
    println!("{}", "Introduction cell digests".bold());
    if let Some(hashes) = intro.hashes() {
        print_triple(hashes);
    }

    println!();
    println!("{}", "Forest statistics".bold());
    println!("  Cells:            {}", forest::count_cells(&docs).to_string().yellow());
    println!("  Chunks:           {}", forest::count_chunks(&docs).to_string().yellow());
    println!("  Embeddings:       {}", forest::count_embeddings(&docs).to_string().yellow());
    println!("  Bytes:            {}", forest::count_bytes(&docs).to_string().yellow());
    println!(
        "  With chunks:      {}",
        forest::find_cells_with_chunks(&docs).len().to_string().yellow()
    );
    println!(
        "  Distinct SHA-256: {}",
        forest::distinct_sha256(&docs).len().to_string().yellow()
    );

    println!();
    println!("{}", "Chunk lookup by SHA-256".bold());
    let target = intro.chunks[0]
        .sha256()
        .map(|digest| *digest.as_bytes())
        .unwrap_or_default();
    let found: Vec<&Chunk> = forest::chunks_by_sha256(&docs, &target)?.collect();
    println!("  Target: {}", hex_preview(&target).cyan());
    println!("  Found {} matching chunk(s)", found.len().to_string().yellow());
    for chunk in found {
        if let Some(text) = chunk.text() {
            println!("    {} {}", "→".green(), text);
        }
    }

    if args.json {
        println!();
        println!("{}", serde_json::to_string_pretty(&docs[0])?);
    }

    Ok(())
}

fn cmd_hash(args: HashArgs) -> anyhow::Result<()> {
    if !args.list.is_empty() {
        match scf_hash::hash_string_list(&args.list) {
            Some(triple) => print_triple(&triple),
            None => println!("{}", "empty list: no digest".dimmed()),
        }
        return Ok(());
    }

    let Some(text) = args.text else {
        bail!("provide TEXT or --list items");
    };
    print_triple(&scf_hash::hash_text(&text));
    Ok(())
}

fn print_triple(triple: &HashTriple) {
    println!("  MD5:     {}", triple.md5.to_hex().cyan());
    println!("  SHA-1:   {}", triple.sha1.to_hex().cyan());
    println!("  SHA-256: {}", triple.sha256.to_hex().cyan());
}

fn hex_preview(bytes: &[u8]) -> String {
    let hex: String = bytes.iter().take(8).map(|b| format!("{b:02x}")).collect();
    format!("{hex}…")
}

/// The report document from the library walkthrough: a root with an
/// introduction (chunked, with embeddings), a data table, nested findings
/// lists, and a conclusion carrying a binary attachment.
fn build_report_document() -> anyhow::Result<Cell> {
    let mut root = Cell::new();
    root.set_text("Root document with multiple sections and types of content");
    root.metadata = Some(serde_json::json!({
        "document_type": "Report",
        "title": "Comprehensive Analysis",
        "version": "1.0",
    }));

    let mut introduction = Cell::new();
    introduction.set_text("Introduction to the topic and overview of key findings.");
    introduction.position = 0;
    for (position, (text, start, end)) in [
        ("Introduction to the topic", 0, 24),
        ("overview of key findings", 26, 51),
    ]
    .into_iter()
    .enumerate()
    {
        let mut chunk = Chunk::new();
        chunk.set_text(text);
        chunk.position = position;
        chunk.start = start;
        chunk.end = end;
        chunk.embeddings = mock_embeddings(384);
        introduction.chunks.push(chunk);
    }

    let mut results = Table::new(vec!["Category".into(), "Value".into(), "Change".into()]);
    for (category, value, change) in [
        ("Category A", "125.7", "10.3"),
        ("Category B", "89.2", "-5.1"),
        ("Category C", "203.4", "15.8"),
        ("Category D", "56.9", "2.2"),
    ] {
        results.push_row(vec![
            Some(category.into()),
            Some(value.into()),
            Some(change.into()),
        ])?;
    }
    let mut data_section = Cell::new();
    data_section.set_table(results);
    data_section.position = 1;

    let mut findings = Cell::new();
    findings.set_text("Key findings from the analysis");
    findings.position = 2;

    let mut positive = Cell::new();
    positive.set_unordered_list(vec![
        "Strong performance in Category A with 10.3% growth".into(),
        "Exceptional results in Category C with 15.8% increase".into(),
        "Slight improvement in Category D".into(),
    ]);
    positive.position = 0;

    let mut negative = Cell::new();
    negative.set_unordered_list(vec![
        "Decline in Category B by 5.1%".into(),
        "Below target performance in Category D despite growth".into(),
    ]);
    negative.position = 1;

    findings.children.push(positive);
    findings.children.push(negative);

    let mut conclusion = Cell::new();
    conclusion.set_text("Conclusion and recommendations based on the analysis.");
    conclusion.position = 3;

    let mut recommendations = Cell::new();
    recommendations.set_ordered_list(vec![
        "Focus resources on expanding Category C".into(),
        "Investigate causes for decline in Category B".into(),
        "Develop strategy to improve Category D performance".into(),
        "Maintain current approach for Category A".into(),
    ]);
    recommendations.position = 0;

    let mut attachment = Cell::new();
    attachment.set_binary(b"Mock data for a PDF report attachment".to_vec());
    attachment.position = 1;
    attachment.bounding_box = Some(BoundingBox::from_rect(10, 10, 110, 60));
    attachment.metadata = Some(serde_json::json!({
        "file_type": "PDF",
        "file_name": "detailed_analysis.pdf",
    }));

    conclusion.children.push(recommendations);
    conclusion.children.push(attachment);

    root.children.push(introduction);
    root.children.push(data_section);
    root.children.push(findings);
    root.children.push(conclusion);

    Ok(root)
}

fn mock_embeddings(dims: usize) -> Vec<f32> {
    (0..dims).map(|i| (i as f32 * 0.031).sin()).collect()
}
