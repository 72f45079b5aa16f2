use folio_core::{
    bundled_posts, bundled_projects, filter_items, listing, post_facets, project_facets, Catalog,
    ContentItem, FilterState, Post, Project,
};

fn slugs<T: ContentItem>(items: &[&T]) -> Vec<String> {
    items.iter().map(|item| item.slug().to_string()).collect()
}

fn project(slug: &str, title: &str, category: &str, technologies: &[&str]) -> Project {
    Project::new(
        slug,
        title,
        format!("{title} description"),
        category,
        technologies.iter().map(|tech| tech.to_string()).collect(),
    )
}

#[test]
fn default_state_returns_full_catalog_in_order() {
    let projects = bundled_projects().unwrap();
    let visible = filter_items(projects.list_all(), &FilterState::default());
    let expected: Vec<&Project> = projects.list_all().iter().collect();
    assert_eq!(visible, expected);

    let posts = bundled_posts().unwrap();
    assert_eq!(
        filter_items(posts.list_all(), &FilterState::new()).len(),
        posts.len()
    );
}

#[test]
fn facets_combine_with_and() {
    let projects = bundled_projects().unwrap();
    let mut state = FilterState::new();
    state.set_query("hack");
    state.select_category("Web Design");
    state.toggle_tag("JavaScript");

    let visible = filter_items(projects.list_all(), &state);
    assert_eq!(slugs(&visible), vec!["hack-gear-1-0"]);

    state.select_category("UI/UX");
    assert!(filter_items(projects.list_all(), &state).is_empty());
}

#[test]
fn result_equals_intersection_of_single_facets() {
    let projects = bundled_projects().unwrap();

    let mut query_only = FilterState::new();
    query_only.set_query("python");
    let mut category_only = FilterState::new();
    category_only.select_category("Python Tool");
    let mut tags_only = FilterState::new();
    tags_only.toggle_tag("Flask");

    let mut combined = FilterState::new();
    combined.set_query("python");
    combined.select_category("Python Tool");
    combined.toggle_tag("Flask");

    let expected: Vec<&Project> = projects
        .list_all()
        .iter()
        .filter(|item| {
            query_only.matches(*item) && category_only.matches(*item) && tags_only.matches(*item)
        })
        .collect();
    let visible = filter_items(projects.list_all(), &combined);
    assert_eq!(visible, expected);
    assert_eq!(slugs(&visible), vec!["youtube-downloader"]);
}

#[test]
fn tag_facet_matches_any_selected_value() {
    let mut state = FilterState::new();
    state.toggle_tag("Python");
    state.toggle_tag("Flask");

    let projects = Catalog::try_new(vec![
        project("site", "Site", "Web", &["HTML5"]),
        project("api", "Api", "Web App", &["Python", "Flask", "SQLite"]),
        project("cli", "Cli", "Tool", &["Flask"]),
    ])
    .unwrap();
    let visible = filter_items(projects.list_all(), &state);
    assert_eq!(slugs(&visible), vec!["api", "cli"]);

    let posts = Catalog::try_new(vec![Post::new(
        "hooks",
        "Hooks",
        "excerpt",
        vec!["React".to_string()],
    )])
    .unwrap();
    assert!(filter_items(posts.list_all(), &state).is_empty());
}

#[test]
fn query_is_case_insensitive_over_title_and_summary() {
    let posts = bundled_posts().unwrap();
    let mut state = FilterState::new();
    state.set_query("REACT");
    let visible = filter_items(posts.list_all(), &state);
    assert_eq!(
        slugs(&visible),
        vec![
            "modern-react-patterns",
            "performance-optimization-react",
            "state-management-strategies",
        ]
    );

    state.set_query("hackathon");
    let projects = bundled_projects().unwrap();
    assert_eq!(
        slugs(&filter_items(projects.list_all(), &state)),
        vec!["hack-gear-1-0"]
    );
}

#[test]
fn toggling_a_tag_twice_restores_state_and_result() {
    let projects = bundled_projects().unwrap();
    let mut state = FilterState::new();
    state.select_category("AI/ML");
    let before_state = state.clone();
    let before = filter_items(projects.list_all(), &state);

    assert!(state.toggle_tag("Linux"));
    assert!(!state.toggle_tag("Linux"));

    assert_eq!(state, before_state);
    assert_eq!(filter_items(projects.list_all(), &state), before);
}

#[test]
fn unknown_values_yield_empty_results() {
    let projects = bundled_projects().unwrap();
    let mut state = FilterState::new();
    state.select_category("Embedded");
    assert!(filter_items(projects.list_all(), &state).is_empty());

    let mut tags = FilterState::new();
    tags.toggle_tag("javascript");
    assert!(filter_items(projects.list_all(), &tags).is_empty());
}

#[test]
fn category_never_matches_posts() {
    let posts = bundled_posts().unwrap();
    let mut state = FilterState::new();
    state.select_category("React");
    assert!(filter_items(posts.list_all(), &state).is_empty());
}

#[test]
fn listing_reports_counts_and_facets() {
    let projects = bundled_projects().unwrap();
    let mut state = FilterState::new();
    let unfiltered = listing(projects, &state);
    assert!(!unfiltered.has_active_filters);
    assert_eq!(unfiltered.visible(), 6);

    state.toggle_tag("Python");
    state.toggle_tag("Flask");
    let filtered = listing(projects, &state);
    assert_eq!(filtered.summary("projects"), "Showing 4 of 6 projects");

    let facets = project_facets(projects);
    assert_eq!(facets.tags.len(), 12);
    assert_eq!(facets.categories.len(), 6);

    let post_badges = post_facets(bundled_posts().unwrap());
    assert!(post_badges.categories.is_empty());
    assert_eq!(post_badges.tags.len(), 14);
}
