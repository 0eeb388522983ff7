//! Restaurant list filter: search, sort and pagination options

/// Rows skipped when no offset is given
pub const DEFAULT_OFFSET: u32 = 0;

/// Rows returned when no limit is given
pub const DEFAULT_LIMIT: u32 = 999;

/// Sort key for the restaurant listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// By name (`dba`)
    #[default]
    Dba,
    /// By borough
    Boro,
    /// By current inspection grade
    Grade,
}

impl SortOrder {
    /// Parse an `order` query value. Unknown keys sort by name.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "boro" => Self::Boro,
            "grade" => Self::Grade,
            _ => Self::Dba,
        }
    }

    /// Fully-qualified column the listing is ordered by.
    pub fn column(self) -> &'static str {
        match self {
            Self::Dba => "restaurant.dba",
            Self::Boro => "restaurant.boro",
            Self::Grade => "inspection.grade",
        }
    }
}

/// Raw query-string parameters for `GET /restaurants`.
///
/// Every field is an optional string so a malformed number never
/// turns into a 400; [`RestaurantFilter`] applies the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub dba: Option<String>,
    pub boro: Option<String>,
    pub street: Option<String>,
    pub cuisine: Option<String>,
    pub min_grade: Option<String>,
    pub order: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
}

impl FromIterator<(String, String)> for ListParams {
    /// Collect decoded query pairs. A repeated key keeps its first
    /// value; unknown keys are ignored.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "dba" => &mut params.dba,
                "boro" => &mut params.boro,
                "street" => &mut params.street,
                "cuisine" => &mut params.cuisine,
                "minGrade" => &mut params.min_grade,
                "order" => &mut params.order,
                "offset" => &mut params.offset,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

/// Typed options for the restaurant listing.
///
/// Text fields hold trimmed, non-empty values only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantFilter {
    /// Name substring
    pub dba: Option<String>,
    /// Exact borough
    pub boro: Option<String>,
    /// Street substring
    pub street: Option<String>,
    /// Exact cuisine
    pub cuisine: Option<String>,
    /// Worst grade still accepted (`grade <= min_grade`)
    pub min_grade: Option<String>,
    pub order: SortOrder,
    pub offset: u32,
    pub limit: u32,
}

impl Default for RestaurantFilter {
    fn default() -> Self {
        Self {
            dba: None,
            boro: None,
            street: None,
            cuisine: None,
            min_grade: None,
            order: SortOrder::default(),
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<ListParams> for RestaurantFilter {
    fn from(params: ListParams) -> Self {
        Self {
            dba: non_blank(params.dba),
            boro: non_blank(params.boro),
            street: non_blank(params.street),
            cuisine: non_blank(params.cuisine),
            min_grade: non_blank(params.min_grade),
            order: params
                .order
                .as_deref()
                .map(SortOrder::parse)
                .unwrap_or_default(),
            offset: parse_or(params.offset, DEFAULT_OFFSET),
            limit: parse_or(params.limit, DEFAULT_LIMIT),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_or(value: Option<String>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
