use super::{
    error::MafError,
    schema::{REFERENCE_ALLELE, TUMOR_SEQ_ALLELE1, TUMOR_SEQ_ALLELE2},
    table::MafTable,
};
use std::fmt;

/// Relationship of the two tumor alleles to the reference allele.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlleleClass {
    /// Allele 1 differs from the reference, allele 2 matches it.
    Allele1Variant,
    /// Allele 2 differs from the reference, allele 1 matches it.
    Allele2Variant,
    BothVariant,
    NoneVariant,
}

impl AlleleClass {
    /// Exact string comparison; a missing value never matches, not even another missing value.
    pub fn classify(
        ref_allele: Option<&str>,
        allele1: Option<&str>,
        allele2: Option<&str>,
    ) -> Self {
        let same_as_ref = |allele: Option<&str>| match (ref_allele, allele) {
            (Some(r), Some(a)) => r == a,
            _ => false,
        };
        match (same_as_ref(allele1), same_as_ref(allele2)) {
            (false, true) => AlleleClass::Allele1Variant,
            (true, false) => AlleleClass::Allele2Variant,
            (false, false) => AlleleClass::BothVariant,
            (true, true) => AlleleClass::NoneVariant,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlleleSummary {
    pub total: usize,
    pub allele1_variant: usize,
    pub allele2_variant: usize,
    pub both_variant: usize,
    pub none_variant: usize,
}

impl AlleleSummary {
    pub fn from_table(table: &MafTable) -> Result<Self, MafError> {
        let column_index = |name: &str| {
            table
                .schema()
                .index_of(name)
                .ok_or_else(|| MafError::Schema(name.to_string()))
        };
        let ref_idx = column_index(REFERENCE_ALLELE)?;
        let allele1_idx = column_index(TUMOR_SEQ_ALLELE1)?;
        let allele2_idx = column_index(TUMOR_SEQ_ALLELE2)?;

        let mut summary = AlleleSummary::default();
        for record in table.records() {
            let field = |index: usize, name: &str| {
                record
                    .field(index)
                    .ok_or_else(|| MafError::Schema(name.to_string()))
            };
            let class = AlleleClass::classify(
                field(ref_idx, REFERENCE_ALLELE)?,
                field(allele1_idx, TUMOR_SEQ_ALLELE1)?,
                field(allele2_idx, TUMOR_SEQ_ALLELE2)?,
            );
            summary.add(class);
        }
        Ok(summary)
    }

    pub fn add(&mut self, class: AlleleClass) {
        self.total += 1;
        match class {
            AlleleClass::Allele1Variant => self.allele1_variant += 1,
            AlleleClass::Allele2Variant => self.allele2_variant += 1,
            AlleleClass::BothVariant => self.both_variant += 1,
            AlleleClass::NoneVariant => self.none_variant += 1,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.allele1_variant + self.allele2_variant + self.both_variant + self.none_variant
            == self.total
    }
}

impl fmt::Display for AlleleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of lines: {}", self.total)?;
        writeln!(
            f,
            "Allele 1 is different from the ref and 2 is the same: {}",
            self.allele1_variant
        )?;
        writeln!(
            f,
            "Allele 2 is different from the ref and 1 is the same: {}",
            self.allele2_variant
        )?;
        writeln!(
            f,
            "Both alleles are different from the ref: {}",
            self.both_variant
        )?;
        writeln!(
            f,
            "Both alleles are the same as the ref: {}",
            self.none_variant
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maf::{MafRecord, MafSchema};

    fn table_from_alleles(rows: &[(&str, &str, &str)]) -> MafTable {
        let schema = MafSchema::default();
        let records = rows
            .iter()
            .map(|(r, a1, a2)| {
                let line = format!("TP53\t7157\tbroad\t37\t17\t1\t1\t+\tMissense_Mutation\tSNP\t{r}\t{a1}\t{a2}");
                MafRecord::from_line(&line, schema.len())
            })
            .collect();
        MafTable::with_records(schema, records)
    }

    #[test]
    fn classify_each_category() {
        use AlleleClass::*;
        assert_eq!(AlleleClass::classify(Some("A"), Some("T"), Some("A")), Allele1Variant);
        assert_eq!(AlleleClass::classify(Some("A"), Some("A"), Some("T")), Allele2Variant);
        assert_eq!(AlleleClass::classify(Some("A"), Some("T"), Some("C")), BothVariant);
        assert_eq!(AlleleClass::classify(Some("A"), Some("A"), Some("A")), NoneVariant);
    }

    #[test]
    fn comparison_is_case_and_whitespace_sensitive() {
        use AlleleClass::*;
        assert_eq!(AlleleClass::classify(Some("A"), Some("a"), Some("A ")), BothVariant);
    }

    #[test]
    fn missing_values_never_match() {
        use AlleleClass::*;
        assert_eq!(AlleleClass::classify(None, None, None), BothVariant);
        assert_eq!(AlleleClass::classify(Some("A"), None, Some("A")), Allele1Variant);
        assert_eq!(AlleleClass::classify(Some("A"), Some("A"), None), Allele2Variant);
    }

    #[test]
    fn four_row_scenario() {
        let table = table_from_alleles(&[
            ("A", "A", "T"),
            ("A", "T", "A"),
            ("A", "T", "C"),
            ("A", "A", "A"),
        ]);
        let summary = AlleleSummary::from_table(&table).unwrap();
        assert_eq!(
            summary,
            AlleleSummary {
                total: 4,
                allele1_variant: 1,
                allele2_variant: 1,
                both_variant: 1,
                none_variant: 1,
            }
        );
    }

    #[test]
    fn counts_partition_the_rows() {
        let alleles = ["A", "C", "", "a"];
        let mut rows = Vec::new();
        for r in alleles {
            for a1 in alleles {
                for a2 in alleles {
                    rows.push((r, a1, a2));
                }
            }
        }
        let summary = AlleleSummary::from_table(&table_from_alleles(&rows)).unwrap();
        assert_eq!(summary.total, 64);
        assert!(summary.is_consistent());
        // Only the three non-missing references can match: 3 refs x (1 match x 3 mismatches).
        assert_eq!(summary.allele1_variant, 9);
        assert_eq!(summary.allele2_variant, 9);
        assert_eq!(summary.none_variant, 3);
        assert_eq!(summary.both_variant, 43);
    }

    #[test]
    fn empty_table_reports_zeros() {
        let summary = AlleleSummary::from_table(&MafTable::new(MafSchema::default())).unwrap();
        assert_eq!(summary, AlleleSummary::default());
        assert_eq!(
            summary.to_string(),
            "Number of lines: 0\n\
             Allele 1 is different from the ref and 2 is the same: 0\n\
             Allele 2 is different from the ref and 1 is the same: 0\n\
             Both alleles are different from the ref: 0\n\
             Both alleles are the same as the ref: 0\n"
        );
    }

    #[test]
    fn report_lines_in_order() {
        let summary = AlleleSummary {
            total: 10,
            allele1_variant: 1,
            allele2_variant: 2,
            both_variant: 3,
            none_variant: 4,
        };
        let report = summary.to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Number of lines: 10",
                "Allele 1 is different from the ref and 2 is the same: 1",
                "Allele 2 is different from the ref and 1 is the same: 2",
                "Both alleles are different from the ref: 3",
                "Both alleles are the same as the ref: 4",
            ]
        );
    }

    #[test]
    fn schema_without_allele_column_is_schema_error() {
        let schema = MafSchema::new([REFERENCE_ALLELE, TUMOR_SEQ_ALLELE1]);
        let table = MafTable::with_records(schema, vec![MafRecord::from_line("A\tA", 2)]);
        let err = AlleleSummary::from_table(&table).unwrap_err();
        assert!(matches!(err, MafError::Schema(ref column) if column == TUMOR_SEQ_ALLELE2));
        assert_eq!(
            err.to_string(),
            "Required column 'Tumor_Seq_Allele2' is missing"
        );
    }

    #[test]
    fn short_record_is_schema_error() {
        let schema = MafSchema::new([REFERENCE_ALLELE, TUMOR_SEQ_ALLELE1, TUMOR_SEQ_ALLELE2]);
        let table = MafTable::with_records(schema, vec![MafRecord::from_line("A\tA", 2)]);
        assert!(matches!(
            AlleleSummary::from_table(&table),
            Err(MafError::Schema(_))
        ));
    }
}
