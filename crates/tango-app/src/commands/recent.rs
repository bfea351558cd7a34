use tango_config::RecentWords;
use tango_export::tsv;

use crate::state::AppState;

pub fn handle_recent(state: &AppState) -> anyhow::Result<()> {
    println!("{}", recent_tsv(&state.recent_words()?));
    Ok(())
}

fn recent_tsv(recent: &RecentWords) -> String {
    let mut lines = vec![tsv::header()];
    lines.extend(recent.entries().iter().map(tsv::entry_line));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tango_core::DictionaryEntry;

    #[test]
    fn test_recent_tsv_newest_first() {
        let mut recent = RecentWords::default();
        for (ent_seq, form) in [(1, "天気"), (2, "雨")] {
            recent.put(DictionaryEntry {
                ent_seq: Some(ent_seq),
                dictionary_form: form.to_string(),
                ..Default::default()
            });
        }

        let output = recent_tsv(&recent);
        let forms: Vec<&str> = output
            .lines()
            .skip(1)
            .filter_map(|line| line.split('\t').next())
            .collect();
        assert_eq!(forms, vec!["雨", "天気"]);
    }
}
