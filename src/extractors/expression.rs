// src/extractors/expression.rs

// --- Imports ---
use std::collections::HashSet;

use crate::dataset::models::{Document, Record};

// --- Recognized field names ---

/// The fields of a record that end up in the summary. Any other name is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Gene,
    SourceName,
    Variance,
    FullRpkm,
}

impl FieldKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gene" => Some(FieldKind::Gene),
            "source_name" => Some(FieldKind::SourceName),
            "var" => Some(FieldKind::Variance),
            "full_rpkm" => Some(FieldKind::FullRpkm),
            _ => None,
        }
    }
}

// --- Data Structures ---

/// One output row: gene, organ, RPKM and variance, all kept as opaque strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionTuple {
    pub gene: String,     // NCBI gene identifier
    pub organ: String,    // `source_name`
    pub rpkm: String,     // `full_rpkm`
    pub variance: String, // `var`
}

/// Which records to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneSelector {
    /// Every record with a non-empty gene identifier.
    All,
    /// Records carrying one of these gene identifiers.
    Selected(HashSet<String>),
}

impl GeneSelector {
    /// Builds a selector from a comma-separated list. An empty list selects all genes.
    ///
    /// Entries are not trimmed, so `"1,,2"` also selects records whose gene field is
    /// present but empty.
    pub fn from_list(list: &str) -> Self {
        if list.is_empty() {
            return GeneSelector::All;
        }
        let ids: HashSet<String> = list.split(',').map(str::to_string).collect();
        if ids.contains("") {
            tracing::warn!("Gene list {:?} contains an empty identifier; records with an empty gene field will match", list);
        }
        GeneSelector::Selected(ids)
    }
}

// --- Extraction ---

/// Maps a record onto the four output slots. Repeated names overwrite earlier values.
pub fn project(record: &Record) -> ExpressionTuple {
    let mut tuple = ExpressionTuple::default();
    for field in &record.fields {
        let slot = match FieldKind::from_name(&field.name) {
            Some(FieldKind::Gene) => &mut tuple.gene,
            Some(FieldKind::SourceName) => &mut tuple.organ,
            Some(FieldKind::Variance) => &mut tuple.variance,
            Some(FieldKind::FullRpkm) => &mut tuple.rpkm,
            None => continue,
        };
        slot.clone_from(&field.value);
    }
    tuple
}

/// Projects every record that has a `gene` field whose value is in `gene_ids`.
/// A record is emitted at most once, whichever of its gene fields matched.
pub fn select_by_genes(document: &Document, gene_ids: &HashSet<String>) -> Vec<ExpressionTuple> {
    document
        .records
        .iter()
        .filter(|record| {
            record.fields.iter().any(|field| {
                FieldKind::from_name(&field.name) == Some(FieldKind::Gene)
                    && gene_ids.contains(&field.value)
            })
        })
        .map(project)
        .collect()
}

/// Projects every record and keeps those with a non-empty gene identifier.
pub fn select_all(document: &Document) -> Vec<ExpressionTuple> {
    document
        .records
        .iter()
        .map(project)
        .filter(|tuple| !tuple.gene.is_empty())
        .collect()
}

/// Runs the selection `selector` asks for. Never fails.
pub fn extract(document: &Document, selector: &GeneSelector) -> Vec<ExpressionTuple> {
    let tuples = match selector {
        GeneSelector::All => {
            tracing::info!("Extracting expression values for all genes");
            select_all(document)
        }
        GeneSelector::Selected(ids) => {
            tracing::info!("Extracting expression values for {} gene(s)", ids.len());
            select_by_genes(document, ids)
        }
    };
    tracing::info!("Selected {} of {} records", tuples.len(), document.len());
    tuples
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::models::Field;

    fn record(fields: &[(&str, &str)]) -> Record {
        Record::new(fields.iter().map(|(n, v)| Field::new(*n, *v)).collect())
    }

    fn gene_record(gene: &str, organ: &str) -> Record {
        record(&[("gene", gene), ("source_name", organ), ("full_rpkm", "1.0"), ("var", "0.1")])
    }

    fn ids(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_field_kind_mapping() {
        assert_eq!(FieldKind::from_name("gene"), Some(FieldKind::Gene));
        assert_eq!(FieldKind::from_name("source_name"), Some(FieldKind::SourceName));
        assert_eq!(FieldKind::from_name("var"), Some(FieldKind::Variance));
        assert_eq!(FieldKind::from_name("full_rpkm"), Some(FieldKind::FullRpkm));
        assert_eq!(FieldKind::from_name("Gene"), None);
        assert_eq!(FieldKind::from_name("exp_rpkm"), None);
    }

    #[test]
    fn test_project_maps_all_four_slots() {
        let rec = record(&[
            ("gene", "1234"),
            ("source_name", "liver"),
            ("var", "0.5"),
            ("full_rpkm", "12.3"),
            ("project_desc", "ignored"),
        ]);
        assert_eq!(
            project(&rec),
            ExpressionTuple {
                gene: "1234".to_string(),
                organ: "liver".to_string(),
                rpkm: "12.3".to_string(),
                variance: "0.5".to_string(),
            }
        );
    }

    #[test]
    fn test_project_is_total_and_last_write_wins() {
        assert_eq!(project(&Record::default()), ExpressionTuple::default());

        let rec = record(&[("source_name", "heart"), ("source_name", "lung"), ("var", "x")]);
        let tuple = project(&rec);
        assert_eq!(tuple.gene, "");
        assert_eq!(tuple.organ, "lung");
        assert_eq!(tuple.rpkm, "");
        assert_eq!(tuple.variance, "x");
    }

    #[test]
    fn test_select_all_keeps_order_and_skips_missing_gene() {
        let document = Document::new(vec![
            gene_record("2", "brain"),
            record(&[("source_name", "kidney")]),
            gene_record("", "colon"),
            gene_record("1", "liver"),
        ]);

        let tuples = select_all(&document);
        let genes: Vec<&str> = tuples.iter().map(|t| t.gene.as_str()).collect();
        assert_eq!(genes, vec!["2", "1"]);
        assert!(tuples.len() <= document.len());
    }

    #[test]
    fn test_select_by_genes_filters_in_document_order() {
        let document = Document::new(vec![
            gene_record("1", "liver"),
            gene_record("2", "brain"),
            gene_record("3", "lung"),
            gene_record("2", "heart"),
        ]);

        let tuples = select_by_genes(&document, &ids(&["2"]));
        let organs: Vec<&str> = tuples.iter().map(|t| t.organ.as_str()).collect();
        assert_eq!(organs, vec!["brain", "heart"]);
        assert!(tuples.iter().all(|t| t.gene == "2"));
    }

    #[test]
    fn test_select_by_genes_emits_record_once() {
        let document = Document::new(vec![record(&[
            ("gene", "1"),
            ("source_name", "liver"),
            ("gene", "2"),
        ])]);

        let tuples = select_by_genes(&document, &ids(&["1", "2"]));
        assert_eq!(tuples.len(), 1);
        // Projection still sees the whole record, so the last gene field wins.
        assert_eq!(tuples[0].gene, "2");
        assert_eq!(tuples[0].organ, "liver");
    }

    #[test]
    fn test_record_without_gene_never_selected() {
        let document = Document::new(vec![record(&[("source_name", "liver"), ("full_rpkm", "3")])]);
        assert!(select_all(&document).is_empty());
        assert!(select_by_genes(&document, &ids(&["", "1"])).is_empty());
    }

    #[test]
    fn test_no_matching_genes_is_empty() {
        let document = Document::new(vec![gene_record("1", "liver"), gene_record("2", "brain")]);
        assert!(select_by_genes(&document, &ids(&["5", "6"])).is_empty());
    }

    #[test]
    fn test_empty_document_is_empty_in_both_modes() {
        let document = Document::default();
        assert!(extract(&document, &GeneSelector::All).is_empty());
        assert!(extract(&document, &GeneSelector::from_list("1,2")).is_empty());
    }

    #[test]
    fn test_explicit_empty_identifier_matches_empty_gene() {
        let document = Document::new(vec![gene_record("", "colon"), gene_record("1", "liver")]);
        let tuples = extract(&document, &GeneSelector::from_list("1,"));
        let organs: Vec<&str> = tuples.iter().map(|t| t.organ.as_str()).collect();
        assert_eq!(organs, vec!["colon", "liver"]);
    }

    #[test]
    fn test_selector_from_list() {
        assert_eq!(GeneSelector::from_list(""), GeneSelector::All);
        assert_eq!(GeneSelector::from_list("5,6,5"), GeneSelector::Selected(ids(&["5", "6"])));
        assert_eq!(GeneSelector::from_list(" 7"), GeneSelector::Selected(ids(&[" 7"])));
    }
}
