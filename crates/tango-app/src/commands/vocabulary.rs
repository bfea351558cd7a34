use tango_core::VocabularyEntry;
use tango_lang_japanese::PosGroup;
use tango_vocabulary::{level_counts, pos_counts};

use crate::cli::VocabularyArgs;
use crate::state::AppState;

pub async fn handle_vocabulary(state: &AppState, args: VocabularyArgs) -> anyhow::Result<()> {
    let (document, visible) = super::visible_vocabulary(state, &args.document, &args.view).await?;

    if args.facets {
        print!("{}", facets_report(&visible, &document.analysis.body_analysis.language));
    } else {
        println!("{}", tango_export::tsv::to_tsv(&visible));
    }
    Ok(())
}

fn facets_report(vocabulary: &[VocabularyEntry], language: &str) -> String {
    let mut report = String::new();

    report.push_str("# level\n");
    for facet in level_counts(vocabulary, language) {
        report.push_str(&format!("{}\t{}\n", facet.key, facet.count));
    }

    report.push_str("# pos\n");
    for facet in pos_counts(vocabulary, language) {
        report.push_str(&format!("{}\t{}\n", facet.key, facet.count));
    }

    report.push_str("# group\n");
    for group in PosGroup::ALL {
        report.push_str(&format!("{}\t{}\n", group.title(), group.count(vocabulary)));
    }

    report
}
