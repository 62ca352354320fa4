use std::process;

use degpath::parser::{read_degs, read_pathway_genes};
use degpath::stats::{top_influential, FoldChangeShares};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        println!("Show how much of the differential expression each pathway carries\n\n");
        println!("Usage\nfold_change_share DEGS.tsv PATHWAY_GENES.tsv hsa04110,hsa04115 <TOP N>\n");
        process::exit(1)
    }

    let degs = read_degs(&args[1]).expect("unable to read the DEG table");
    let associations = read_pathway_genes(&args[2]).expect("unable to read the association table");
    let ids: Vec<&str> = args[3].split(',').collect();

    let shares =
        FoldChangeShares::new(&degs, &associations).expect("input tables must not be empty");
    let percentages = shares
        .percentages(&ids)
        .expect("every pathway id must have association rows");

    println!("### SHARES ###");
    for (id, percentage) in ids.iter().zip(&percentages) {
        println!("{id}\t{percentage:.2}%");
    }

    let top_n = args
        .get(4)
        .map(|arg| arg.parse::<usize>().unwrap_or(3))
        .unwrap_or(3);

    let top = top_influential(top_n, &percentages, &ids).expect("invalid arguments");
    println!("\n### TOP {} ###", top.len());
    for share in &top {
        println!("{}\t{:.2}%", share.pathway_id(), share.percentage());
    }
}
