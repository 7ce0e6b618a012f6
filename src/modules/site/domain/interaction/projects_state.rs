use std::collections::BTreeMap;

use crate::content::domain::entities::{Project, ProjectId};
use crate::site::domain::interaction::description::DescriptionState;

/// Projects shown while the list is collapsed.
pub const COLLAPSED_PROJECT_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VideoSelection {
    #[default]
    None,
    Playing { project: ProjectId, video: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectsEvent {
    ToggleShowAll,
    PlayDemo(ProjectId),
    CloseVideo,
    ToggleDescription(ProjectId),
}

/// Interaction state owned by the projects section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectsState {
    show_all: bool,
    video: VideoSelection,
    descriptions: BTreeMap<ProjectId, DescriptionState>,
}

impl ProjectsState {
    pub fn apply(&mut self, event: ProjectsEvent, projects: &[Project]) {
        match event {
            ProjectsEvent::ToggleShowAll => self.show_all = !self.show_all,
            ProjectsEvent::PlayDemo(id) => {
                if let Some(video) = projects.iter().find(|p| p.id == id).and_then(Project::video) {
                    self.video = VideoSelection::Playing {
                        project: id,
                        video: video.to_string(),
                    };
                }
            }
            ProjectsEvent::CloseVideo => self.video = VideoSelection::None,
            ProjectsEvent::ToggleDescription(id) => {
                if projects.iter().any(|p| p.id == id) {
                    let state = self.descriptions.entry(id).or_default();
                    state.toggle();
                    if *state == DescriptionState::Collapsed {
                        self.descriptions.remove(&id);
                    }
                }
            }
        }
    }

    /// State after `event`, leaving `self` untouched. Used to build links.
    pub fn after(&self, event: ProjectsEvent, projects: &[Project]) -> Self {
        let mut next = self.clone();
        next.apply(event, projects);
        next
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn video(&self) -> &VideoSelection {
        &self.video
    }

    pub fn description(&self, id: ProjectId) -> DescriptionState {
        self.descriptions.get(&id).copied().unwrap_or_default()
    }

    pub fn expanded(&self) -> impl Iterator<Item = ProjectId> + '_ {
        self.descriptions
            .iter()
            .filter(|(_, state)| state.is_expanded())
            .map(|(id, _)| *id)
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> &'a [Project] {
        if self.show_all {
            projects
        } else {
            &projects[..projects.len().min(COLLAPSED_PROJECT_COUNT)]
        }
    }

    /// Label of the show-all control, absent when everything already fits.
    pub fn toggle_label(&self, total: usize) -> Option<&'static str> {
        if total <= COLLAPSED_PROJECT_COUNT {
            None
        } else if self.show_all {
            Some("Show Less")
        } else {
            Some("View All Projects")
        }
    }

    /// Query parameters that reproduce this state.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.show_all {
            pairs.push(("show_all", "true".to_string()));
        }
        if let VideoSelection::Playing { project, .. } = &self.video {
            pairs.push(("video", project.to_string()));
        }
        let expanded: Vec<String> = self.expanded().map(|id| id.to_string()).collect();
        if !expanded.is_empty() {
            pairs.push(("expanded", expanded.join(",")));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::{project_with_video, projects};

    #[test]
    fn collapsed_shows_first_six_in_document_order() {
        let all = projects(8);
        let state = ProjectsState::default();

        let ids: Vec<u32> = state.visible(&all).iter().map(|p| p.id.0).collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(state.toggle_label(all.len()), Some("View All Projects"));
    }

    #[test]
    fn show_all_reveals_every_project_and_relabels_control() {
        let all = projects(8);
        let mut state = ProjectsState::default();

        state.apply(ProjectsEvent::ToggleShowAll, &all);

        assert_eq!(state.visible(&all).len(), 8);
        assert_eq!(state.toggle_label(all.len()), Some("Show Less"));

        state.apply(ProjectsEvent::ToggleShowAll, &all);
        assert_eq!(state.visible(&all).len(), 6);
    }

    #[test]
    fn visible_count_is_min_of_six_and_total() {
        for total in 0..=9 {
            let all = projects(total);
            let collapsed = ProjectsState::default();
            let expanded = collapsed.after(ProjectsEvent::ToggleShowAll, &all);

            assert_eq!(collapsed.visible(&all).len(), total.min(COLLAPSED_PROJECT_COUNT));
            assert_eq!(expanded.visible(&all).len(), total);
            assert_eq!(
                collapsed.toggle_label(total).is_none(),
                total <= COLLAPSED_PROJECT_COUNT
            );
        }
    }

    #[test]
    fn play_demo_selects_video_and_close_clears_it() {
        let mut all = projects(3);
        all.push(project_with_video(10, "/videos/demo.mp4"));
        let mut state = ProjectsState::default();

        state.apply(ProjectsEvent::PlayDemo(ProjectId(10)), &all);
        assert_eq!(
            state.video(),
            &VideoSelection::Playing {
                project: ProjectId(10),
                video: "/videos/demo.mp4".to_string()
            }
        );

        state.apply(ProjectsEvent::CloseVideo, &all);
        assert_eq!(state.video(), &VideoSelection::None);
    }

    #[test]
    fn play_demo_without_video_is_ignored() {
        let all = projects(3);
        let mut state = ProjectsState::default();

        state.apply(ProjectsEvent::PlayDemo(ProjectId(1)), &all);
        state.apply(ProjectsEvent::PlayDemo(ProjectId(99)), &all);

        assert_eq!(state.video(), &VideoSelection::None);
    }

    #[test]
    fn each_card_keeps_its_own_description_state() {
        let all = projects(3);
        let mut state = ProjectsState::default();

        state.apply(ProjectsEvent::ToggleDescription(ProjectId(2)), &all);

        assert!(state.description(ProjectId(2)).is_expanded());
        assert!(!state.description(ProjectId(1)).is_expanded());

        state.apply(ProjectsEvent::ToggleDescription(ProjectId(2)), &all);
        assert!(!state.description(ProjectId(2)).is_expanded());
        assert_eq!(state, ProjectsState::default());
    }

    #[test]
    fn query_pairs_describe_the_state() {
        let mut all = projects(8);
        all.push(project_with_video(20, "/v.mp4"));
        let state = ProjectsState::default()
            .after(ProjectsEvent::ToggleShowAll, &all)
            .after(ProjectsEvent::PlayDemo(ProjectId(20)), &all)
            .after(ProjectsEvent::ToggleDescription(ProjectId(3)), &all)
            .after(ProjectsEvent::ToggleDescription(ProjectId(1)), &all);

        assert_eq!(
            state.query_pairs(),
            vec![
                ("show_all", "true".to_string()),
                ("video", "20".to_string()),
                ("expanded", "1,3".to_string()),
            ]
        );
    }
}
