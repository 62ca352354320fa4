use std::process;

use degpath::parser::{read_degs, read_pathway_genes, read_pathways};
use degpath::report::write_enrichment_file;
use degpath::stats::{pathway_enrichment, EnrichmentConfig, EnrichmentResult};

/// Prints the pathways with the smallest p-values
fn print_enrichments(results: &[EnrichmentResult], output_len: usize) {
    let mut sorted: Vec<&EnrichmentResult> = results.iter().collect();
    sorted.sort_by(|a, b| {
        a.p_value()
            .partial_cmp(&b.p_value())
            .expect("nan must not appear as p-value")
    });

    println!("### PATHWAYS ###");
    for result in &sorted[0..std::cmp::min(output_len, sorted.len())] {
        println!(
            "{}\t{} of {}\t{:e}\t({})",
            result.pathway_id(),
            result.observed(),
            result.pathway_size(),
            result.adjusted_p_value(),
            result.enrichment_score()
        );
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Show pathways enriched for differentially expressed genes\n\n");
        println!(
            "Usage\nenrichment DEGS.tsv PATHWAYS.tsv PATHWAY_GENES.tsv <N RESULTS> <SUMMARY FILE>\n"
        );
        process::exit(1)
    }

    let degs = read_degs(&args[1]).expect("unable to read the DEG table");
    let pathways = read_pathways(&args[2]).expect("unable to read the pathway list");
    let associations = read_pathway_genes(&args[3]).expect("unable to read the association table");

    let results = pathway_enrichment(&pathways, &degs, &associations, EnrichmentConfig::default());

    let output_len = args
        .get(4)
        .map(|arg| arg.parse::<usize>().unwrap_or(10))
        .unwrap_or(10);

    print_enrichments(&results, output_len);

    if let Some(summary) = args.get(5) {
        write_enrichment_file(summary, &results).expect("unable to write the summary");
        println!("\nSummary written to {summary}");
    }

    println!(
        "\nPathways: {}\nTotal DEGs: {}\nTotal associations: {}",
        pathways.len(),
        degs.len(),
        associations.len()
    );
}
