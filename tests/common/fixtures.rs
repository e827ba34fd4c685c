//! Article and summary texts shared across integration tests.

/// 42 words, passes the content gate, target range 25-30.
pub const HEALTH_ARTICLE: &str = "A randomized controlled trial of 300 patients found the new vaccine \
reduced infection rates. The study, published by researchers at the hospital, reported 85% \
efficacy and few adverse events. Public health officials said the treatment could lower \
mortality among chronic disease patients.";

/// Passes the content gate; shares no numbers with `CLEAN_SUMMARY`.
pub const DIABETES_ARTICLE: &str = "Researchers followed 1200 adults with type 2 diabetes in a \
cohort study over 4 years. Patients who walked daily had lower blood sugar and fewer cardiac \
events. The clinical team said the therapy was safe, though the study was not randomized and \
more research is needed.";

/// Fails the content gate on keyword hits.
pub const SPORTS_ARTICLE: &str = "The football team played a thrilling match on Saturday afternoon. \
Fans cheered loudly as the striker scored twice in the second half. The coach praised the \
defense and said the squad will travel north next weekend for the final game of the season.";

/// 30 words, keeps every number and entity of `HEALTH_ARTICLE`.
pub const CLEAN_SUMMARY: &str = "A trial of 300 patients found the vaccine cut infection rates. It \
showed 85% efficacy and few side effects. Health officials say it could lower deaths in chronic \
disease patients.";

/// Below the 25-word floor.
pub const SHORT_SUMMARY: &str = "The vaccine trial found 85% efficacy in 300 patients.";

/// 27 words with none of the article's numbers.
pub const NUMBERLESS_SUMMARY: &str = "The study reported efficacy findings for a new vaccine. \
Officials said results were promising and that further trials would follow to confirm the \
benefits for patients soon.";
