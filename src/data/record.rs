use std::fmt;

/// The sixteen columns of a game sales row, in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Platform,
    YearOfRelease,
    Genre,
    Publisher,
    NaSales,
    EuSales,
    JpSales,
    OtherSales,
    GlobalSales,
    CriticScore,
    CriticCount,
    UserScore,
    UserCount,
    Developer,
    Rating,
}

pub const FIELD_COUNT: usize = 16;

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Name,
        Field::Platform,
        Field::YearOfRelease,
        Field::Genre,
        Field::Publisher,
        Field::NaSales,
        Field::EuSales,
        Field::JpSales,
        Field::OtherSales,
        Field::GlobalSales,
        Field::CriticScore,
        Field::CriticCount,
        Field::UserScore,
        Field::UserCount,
        Field::Developer,
        Field::Rating,
    ];

    /// Column name used in the header row of the source file.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Platform => "Platform",
            Field::YearOfRelease => "Year_of_Release",
            Field::Genre => "Genre",
            Field::Publisher => "Publisher",
            Field::NaSales => "NA_Sales",
            Field::EuSales => "EU_Sales",
            Field::JpSales => "JP_Sales",
            Field::OtherSales => "Other_Sales",
            Field::GlobalSales => "Global_Sales",
            Field::CriticScore => "Critic_Score",
            Field::CriticCount => "Critic_Count",
            Field::UserScore => "User_Score",
            Field::UserCount => "User_Count",
            Field::Developer => "Developer",
            Field::Rating => "Rating",
        }
    }

    pub fn from_header(name: &str) -> Option<Field> {
        let name = name.trim().trim_start_matches('\u{feff}');
        Field::ALL.into_iter().find(|f| f.header() == name)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Where each field lives in a header row. Fields absent from the header map
/// to `None` and read back as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldColumns {
    positions: [Option<usize>; FIELD_COUNT],
}

impl FieldColumns {
    /// Locate the known fields in a header row. The first occurrence wins when
    /// a name is repeated.
    pub fn locate(header: &[String]) -> Self {
        let mut positions = [None; FIELD_COUNT];
        for (col_idx, name) in header.iter().enumerate() {
            if let Some(field) = Field::from_header(name) {
                positions[field.slot()].get_or_insert(col_idx);
            }
        }
        Self { positions }
    }

    pub fn position(&self, field: Field) -> Option<usize> {
        self.positions[field.slot()]
    }

    pub fn found_count(&self) -> usize {
        self.positions.iter().filter(|p| p.is_some()).count()
    }

    pub fn missing(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|f| self.position(*f).is_none())
    }
}

/// One row of the source, kept as raw text. Nothing is validated here; numeric
/// parsing happens only in [`crate::data::extract`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRecord {
    values: [String; FIELD_COUNT],
}

impl GameRecord {
    pub fn new(values: [String; FIELD_COUNT]) -> Self {
        Self { values }
    }

    /// Build a record from a data row. Short rows leave the trailing fields
    /// empty.
    pub fn from_row(columns: &FieldColumns, row: &[String]) -> Self {
        let values = Field::ALL.map(|field| {
            columns
                .position(field)
                .and_then(|idx| row.get(idx))
                .cloned()
                .unwrap_or_default()
        });
        Self { values }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.slot()]
    }

    pub fn title(&self) -> &str {
        self.get(Field::Name)
    }

    pub fn platform(&self) -> &str {
        self.get(Field::Platform)
    }

    pub fn year_of_release(&self) -> &str {
        self.get(Field::YearOfRelease)
    }

    pub fn genre(&self) -> &str {
        self.get(Field::Genre)
    }

    pub fn publisher(&self) -> &str {
        self.get(Field::Publisher)
    }

    pub fn na_sales(&self) -> &str {
        self.get(Field::NaSales)
    }

    pub fn eu_sales(&self) -> &str {
        self.get(Field::EuSales)
    }

    pub fn jp_sales(&self) -> &str {
        self.get(Field::JpSales)
    }

    pub fn other_sales(&self) -> &str {
        self.get(Field::OtherSales)
    }

    pub fn global_sales(&self) -> &str {
        self.get(Field::GlobalSales)
    }

    pub fn critic_score(&self) -> &str {
        self.get(Field::CriticScore)
    }

    pub fn critic_count(&self) -> &str {
        self.get(Field::CriticCount)
    }

    pub fn user_score(&self) -> &str {
        self.get(Field::UserScore)
    }

    pub fn user_count(&self) -> &str {
        self.get(Field::UserCount)
    }

    pub fn developer(&self) -> &str {
        self.get(Field::Developer)
    }

    pub fn rating(&self) -> &str {
        self.get(Field::Rating)
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\nPlatform: {}\nGlobal Sales: {} million",
            self.title(),
            self.platform(),
            self.global_sales()
        )
    }
}

#[cfg(test)]
pub(crate) fn record_with(fields: &[(Field, &str)]) -> GameRecord {
    let mut values: [String; FIELD_COUNT] = Default::default();
    for (field, value) in fields {
        values[field.slot()] = (*value).to_string();
    }
    GameRecord::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn every_field_has_a_distinct_header() {
        for (i, a) in Field::ALL.iter().enumerate() {
            assert_eq!(a.slot(), i);
            assert_eq!(Field::from_header(a.header()), Some(*a));
            for b in &Field::ALL[i + 1..] {
                assert_ne!(a.header(), b.header());
            }
        }
    }

    #[test]
    fn header_lookup_ignores_padding_and_bom() {
        assert_eq!(Field::from_header("\u{feff}Name"), Some(Field::Name));
        assert_eq!(Field::from_header("  Critic_Score "), Some(Field::CriticScore));
        assert_eq!(Field::from_header("critic_score"), None);
    }

    #[test]
    fn from_row_follows_header_positions() {
        let header = strings(&["Critic_Score", "Name", "Unrelated", "Global_Sales"]);
        let columns = FieldColumns::locate(&header);
        assert_eq!(columns.found_count(), 3);
        assert!(columns.missing().any(|f| f == Field::Platform));

        let record = GameRecord::from_row(&columns, &strings(&["76", "Wii Sports", "x", "82.53"]));
        assert_eq!(record.title(), "Wii Sports");
        assert_eq!(record.critic_score(), "76");
        assert_eq!(record.global_sales(), "82.53");
        assert_eq!(record.platform(), "");
    }

    #[test]
    fn short_rows_leave_trailing_fields_empty() {
        let header = strings(&["Name", "Global_Sales", "Critic_Score"]);
        let columns = FieldColumns::locate(&header);
        let record = GameRecord::from_row(&columns, &strings(&["Tetris"]));
        assert_eq!(record.title(), "Tetris");
        assert_eq!(record.global_sales(), "");
        assert_eq!(record.critic_score(), "");
    }

    #[test]
    fn first_duplicate_column_wins() {
        let header = strings(&["Name", "Name"]);
        let columns = FieldColumns::locate(&header);
        assert_eq!(columns.position(Field::Name), Some(0));
    }

    #[test]
    fn display_summarises_title_platform_and_sales() {
        let record = record_with(&[
            (Field::Name, "Mario Kart Wii"),
            (Field::Platform, "Wii"),
            (Field::GlobalSales, "35.52"),
        ]);
        assert_eq!(
            record.to_string(),
            "Title: Mario Kart Wii\nPlatform: Wii\nGlobal Sales: 35.52 million"
        );
    }
}
