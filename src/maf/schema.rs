pub const REFERENCE_ALLELE: &str = "Reference_Allele";
pub const TUMOR_SEQ_ALLELE1: &str = "Tumor_Seq_Allele1";
pub const TUMOR_SEQ_ALLELE2: &str = "Tumor_Seq_Allele2";

/// Column names assigned by position to the first 19 fields of every data line.
pub const MAF_COLUMN_NAMES: [&str; 19] = [
    "Hugo_Symbol",
    "Entrez_Gene_Id",
    "Center",
    "NCBI_Build",
    "Chromosome",
    "Start_Position",
    "End_Position",
    "Strand",
    "Variant_Classification",
    "Variant_Type",
    REFERENCE_ALLELE,
    TUMOR_SEQ_ALLELE1,
    TUMOR_SEQ_ALLELE2,
    "dbSNP_RS",
    "dbSNP_Val_Status",
    "Tumor_Sample_Barcode",
    "Matched_Norm_Sample_Barcode",
    "Match_Norm_Seq_Allele1",
    "Match_Norm_Seq_Allele2",
];

/// Ordered column names; the position of a name is the field index it reads from.
#[derive(Debug, Clone, PartialEq)]
pub struct MafSchema {
    columns: Vec<String>,
}

impl Default for MafSchema {
    fn default() -> Self {
        Self::new(MAF_COLUMN_NAMES)
    }
}

impl MafSchema {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}
