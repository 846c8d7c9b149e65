//! Filtering, sorting and paging of the compiled-in listings.
//!
//! Every non-empty criterion of [`SearchFilters`] must match. Sorting is
//! stable, and records whose sort key cannot be read always go last.

use std::cmp::Ordering;

use crate::models::{Freelancer, Job, JobType};

pub const PAGE_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Design,
    Development,
    Marketing,
    Writing,
    Admin,
    Customer,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Design,
        Category::Development,
        Category::Marketing,
        Category::Writing,
        Category::Admin,
        Category::Customer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Design => "Design & Creative",
            Category::Development => "Development & IT",
            Category::Marketing => "Marketing",
            Category::Writing => "Writing",
            Category::Admin => "Admin Support",
            Category::Customer => "Customer Service",
        }
    }

    /// Lower-case fragments looked for in titles and skills
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Design => &[
                "design", "photoshop", "illustrator", "indesign", "figma", "ui/ux", "typography",
                "brand",
            ],
            Category::Development => &[
                "developer", "javascript", "typescript", "react", "node", "swift", "kotlin",
                "flutter", "mongodb", "firebase",
            ],
            Category::Marketing => &["marketing", "seo", "social media", "ads", "campaign"],
            Category::Writing => &["writer", "writing", "copywriting", "blog", "content"],
            Category::Admin => &["admin", "assistant", "data entry", "analyst"],
            Category::Customer => &["customer", "support", "client success"],
        }
    }

    fn matches(self, title: &str, skills: &[&str]) -> bool {
        let title = title.to_lowercase();
        let skills: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        self.keywords()
            .iter()
            .any(|k| title.contains(k) || skills.iter().any(|s| s.contains(k)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub keyword: String,
    pub location: String,
    pub category: Option<Category>,
    pub job_type: Option<JobType>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn keyword_hit(needle: &str, fields: &[&str], skills: &[&str]) -> bool {
    let needle = needle.trim();
    needle.is_empty()
        || fields.iter().any(|f| contains_ci(f, needle))
        || skills.iter().any(|s| contains_ci(s, needle))
}

fn location_hit(needle: &str, location: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || contains_ci(location, needle)
}

pub trait SortOption<T>: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn compare(self, a: &T, b: &T) -> Ordering;

    fn next(self) -> Self {
        let i = Self::ALL.iter().position(|o| *o == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }
}

pub trait Searchable: Sized + 'static {
    type Sort: SortOption<Self>;

    fn matches(&self, filters: &SearchFilters) -> bool;
}

/// Orders by an optional key; missing keys sort last in both directions
fn by_key(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) if descending => y.total_cmp(&x),
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSort {
    Latest,
    Oldest,
    SalaryHigh,
    SalaryLow,
}

impl SortOption<Job> for JobSort {
    const ALL: &'static [Self] = &[
        JobSort::Latest,
        JobSort::Oldest,
        JobSort::SalaryHigh,
        JobSort::SalaryLow,
    ];

    fn label(self) -> &'static str {
        match self {
            JobSort::Latest => "Latest",
            JobSort::Oldest => "Oldest",
            JobSort::SalaryHigh => "Salary: high to low",
            JobSort::SalaryLow => "Salary: low to high",
        }
    }

    fn compare(self, a: &Job, b: &Job) -> Ordering {
        let age = |j: &Job| days_since(j.posted).map(f64::from);
        match self {
            JobSort::Latest => by_key(age(a), age(b), false),
            JobSort::Oldest => by_key(age(a), age(b), true),
            JobSort::SalaryHigh => by_key(annual_salary(a.salary), annual_salary(b.salary), true),
            JobSort::SalaryLow => by_key(annual_salary(a.salary), annual_salary(b.salary), false),
        }
    }
}

impl Searchable for Job {
    type Sort = JobSort;

    fn matches(&self, filters: &SearchFilters) -> bool {
        keyword_hit(
            &filters.keyword,
            &[self.title, self.company, self.description],
            self.skills,
        ) && location_hit(&filters.location, self.location)
            && filters
                .category
                .is_none_or(|c| c.matches(self.title, self.skills))
            && filters.job_type.is_none_or(|t| t == self.job_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreelancerSort {
    RatingHigh,
    RatingLow,
    HourlyHigh,
    HourlyLow,
}

impl SortOption<Freelancer> for FreelancerSort {
    const ALL: &'static [Self] = &[
        FreelancerSort::RatingHigh,
        FreelancerSort::RatingLow,
        FreelancerSort::HourlyHigh,
        FreelancerSort::HourlyLow,
    ];

    fn label(self) -> &'static str {
        match self {
            FreelancerSort::RatingHigh => "Top rated",
            FreelancerSort::RatingLow => "Lowest rated",
            FreelancerSort::HourlyHigh => "Rate: high to low",
            FreelancerSort::HourlyLow => "Rate: low to high",
        }
    }

    fn compare(self, a: &Freelancer, b: &Freelancer) -> Ordering {
        let rating = |f: &Freelancer| Some(f64::from(f.rating));
        match self {
            FreelancerSort::RatingHigh => by_key(rating(a), rating(b), true),
            FreelancerSort::RatingLow => by_key(rating(a), rating(b), false),
            FreelancerSort::HourlyHigh => {
                by_key(a.hourly_rate_value(), b.hourly_rate_value(), true)
            }
            FreelancerSort::HourlyLow => {
                by_key(a.hourly_rate_value(), b.hourly_rate_value(), false)
            }
        }
    }
}

impl Searchable for Freelancer {
    type Sort = FreelancerSort;

    /// Job type does not apply to people and is ignored
    fn matches(&self, filters: &SearchFilters) -> bool {
        keyword_hit(
            &filters.keyword,
            &[self.name, self.title, self.description],
            self.skills,
        ) && location_hit(&filters.location, self.location)
            && filters
                .category
                .is_none_or(|c| c.matches(self.title, self.skills))
    }
}

/// Days since posting from strings like "2 days ago" or "1 week ago"
pub fn days_since(posted: &str) -> Option<u32> {
    let posted = posted.trim().to_lowercase();
    match posted.as_str() {
        "today" | "just now" => return Some(0),
        "yesterday" => return Some(1),
        _ => {}
    }

    let mut words = posted.split_whitespace();
    let count: u32 = words.next()?.parse().ok()?;
    let unit = words.next()?;
    if words.next() != Some("ago") {
        return None;
    }
    let per_unit = match unit.trim_end_matches('s') {
        "hour" | "minute" => 0,
        "day" => 1,
        "week" => 7,
        "month" => 30,
        _ => return None,
    };
    count.checked_mul(per_unit)
}

const WORK_HOURS_PER_YEAR: f64 = 2080.0;

/// First dollar figure of a salary string; hourly figures are annualised
pub fn annual_salary(salary: &str) -> Option<f64> {
    let start = salary.find('$')? + 1;
    let digits: String = salary[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .filter(|c| *c != ',')
        .collect();
    let amount: f64 = digits.parse().ok()?;

    if salary.contains("/hr") {
        Some(amount * WORK_HOURS_PER_YEAR)
    } else {
        Some(amount)
    }
}

/// Filtered, sorted and paged view over a static listing
pub struct Listing<T: Searchable> {
    items: &'static [T],
    filters: SearchFilters,
    sort: T::Sort,
    visible: Vec<&'static T>,
    page: usize,
}

impl<T: Searchable> Listing<T> {
    pub fn new(items: &'static [T]) -> Self {
        let mut listing = Self {
            items,
            filters: SearchFilters::default(),
            sort: <T::Sort as SortOption<T>>::ALL[0],
            visible: Vec::new(),
            page: 0,
        };
        listing.refresh();
        listing
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn sort(&self) -> T::Sort {
        self.sort
    }

    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: T::Sort) {
        self.sort = sort;
        self.refresh();
    }

    pub fn cycle_sort(&mut self) {
        self.set_sort(self.sort.next());
    }

    /// Number of records matching the filters, across all pages
    pub fn total(&self) -> usize {
        self.visible.len()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.visible.len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn page_items(&self) -> &[&'static T] {
        let start = (self.page * PAGE_SIZE).min(self.visible.len());
        let end = (start + PAGE_SIZE).min(self.visible.len());
        &self.visible[start..end]
    }

    pub fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    fn refresh(&mut self) {
        let mut visible: Vec<&'static T> = self
            .items
            .iter()
            .filter(|item| item.matches(&self.filters))
            .collect();
        let sort = self.sort;
        visible.sort_by(|a, b| sort.compare(a, b));
        self.visible = visible;
        self.page = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FREELANCERS, JOBS};

    fn ids<T: Searchable>(listing: &Listing<T>, id: impl Fn(&T) -> &'static str) -> Vec<&'static str> {
        listing.visible.iter().map(|item| id(*item)).collect()
    }

    #[test]
    fn parses_posting_age() {
        assert_eq!(days_since("2 days ago"), Some(2));
        assert_eq!(days_since("1 week ago"), Some(7));
        assert_eq!(days_since("3 Weeks ago"), Some(21));
        assert_eq!(days_since("yesterday"), Some(1));
        assert_eq!(days_since("last spring"), None);
    }

    #[test]
    fn oversized_posting_age_does_not_parse() {
        assert_eq!(days_since("4294967295 weeks ago"), None);
        assert_eq!(days_since("4294967295 hours ago"), Some(0));
    }

    #[test]
    fn parses_salary_figures() {
        assert_eq!(annual_salary("$60,000 - $80,000"), Some(60_000.0));
        assert_eq!(annual_salary("$25 - $35/hr"), Some(52_000.0));
        assert_eq!(annual_salary("Negotiable"), None);
    }

    #[test]
    fn latest_sort_is_stable_for_equal_ages() {
        let listing = Listing::new(JOBS);
        // "1 week ago" ties keep catalogue order: 3 before 4
        assert_eq!(ids(&listing, |j: &Job| j.id), ["1", "2", "5", "6", "3", "4"]);
    }

    #[test]
    fn salary_sort_mixes_hourly_and_annual() {
        let mut listing = Listing::new(JOBS);
        listing.set_sort(JobSort::SalaryHigh);
        assert_eq!(ids(&listing, |j: &Job| j.id), ["3", "5", "4", "1", "2", "6"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let mut listing = Listing::new(JOBS);
        listing.set_filters(SearchFilters {
            keyword: "seo".into(),
            ..SearchFilters::default()
        });
        assert_eq!(ids(&listing, |j: &Job| j.id), ["3", "4"]);

        listing.set_filters(SearchFilters {
            keyword: "seo".into(),
            job_type: Some(JobType::Freelance),
            ..SearchFilters::default()
        });
        assert_eq!(ids(&listing, |j: &Job| j.id), ["4"]);

        listing.set_filters(SearchFilters {
            location: "remote".into(),
            ..SearchFilters::default()
        });
        assert_eq!(listing.total(), 2);
    }

    #[test]
    fn category_matches_titles_and_skills() {
        let mut listing = Listing::new(FREELANCERS);
        listing.set_filters(SearchFilters {
            category: Some(Category::Design),
            ..SearchFilters::default()
        });
        assert_eq!(ids(&listing, |f: &Freelancer| f.id), ["5", "2"]);
    }

    #[test]
    fn freelancers_ignore_job_type() {
        let mut listing = Listing::new(FREELANCERS);
        listing.set_filters(SearchFilters {
            job_type: Some(JobType::Contract),
            ..SearchFilters::default()
        });
        assert_eq!(listing.total(), FREELANCERS.len());
    }

    #[test]
    fn hourly_sort_orders_freelancers() {
        let mut listing = Listing::new(FREELANCERS);
        listing.set_sort(FreelancerSort::HourlyLow);
        assert_eq!(ids(&listing, |f: &Freelancer| f.id), ["3", "5", "1", "6", "2", "4"]);
    }

    #[test]
    fn paging_clamps_and_resets_on_filter() {
        let mut listing = Listing::new(JOBS);
        assert_eq!(listing.page_count(), 2);
        assert_eq!(listing.page_items().len(), PAGE_SIZE);
        assert!(!listing.previous_page());
        assert!(listing.next_page());
        assert_eq!(listing.page_items().len(), 2);
        assert!(!listing.next_page());

        listing.set_filters(SearchFilters {
            keyword: "nothing matches this".into(),
            ..SearchFilters::default()
        });
        assert_eq!(listing.page(), 0);
        assert_eq!(listing.page_count(), 1);
        assert!(listing.page_items().is_empty());
    }

    #[test]
    fn sort_cycles_through_all_options() {
        assert_eq!(JobSort::SalaryLow.next(), JobSort::Latest);
        assert_eq!(FreelancerSort::RatingHigh.next(), FreelancerSort::RatingLow);
    }
}
