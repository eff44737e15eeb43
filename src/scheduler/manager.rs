//! Schedule manager: task list ownership, conflict detection, views.

use tracing::info;

use crate::error::ScheduleError;
use crate::models::Task;
use crate::validation::is_valid_time;

use super::observer::ConflictObserver;

/// Owns the day's tasks and the registered conflict observers.
///
/// One manager per running program, constructed explicitly and owned by
/// whatever composes the program. Tasks are kept in insertion order;
/// [`tasks_by_start`](Self::tasks_by_start) sorts a snapshot for display
/// without disturbing that order.
pub struct ScheduleManager {
    tasks: Vec<Task>,
    observers: Vec<Box<dyn ConflictObserver>>,
}

impl ScheduleManager {
    /// Creates an empty schedule with no observers.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Registers a conflict observer.
    ///
    /// Observers are invoked in registration order on every future
    /// conflict. No deduplication; there is no removal operation.
    pub fn add_observer(&mut self, observer: Box<dyn ConflictObserver>) {
        self.observers.push(observer);
    }

    /// Inserts a task unless it overlaps an already-scheduled one.
    ///
    /// Existing tasks are scanned in insertion order. The first overlap
    /// rejects the candidate: every observer is notified with the
    /// (candidate, existing) pair and the list is left untouched.
    /// Otherwise the candidate is appended to the end.
    ///
    /// # Errors
    /// [`ScheduleError::Conflict`] naming the overlapped task.
    pub fn add_task(&mut self, task: Task) -> Result<(), ScheduleError> {
        if let Some(existing) = self.tasks.iter().find(|t| task.overlaps(t)) {
            for observer in &self.observers {
                observer.on_conflict(&task, existing);
            }
            return Err(ScheduleError::Conflict {
                description: existing.description.clone(),
            });
        }
        info!(
            description = %task.description,
            start = %task.start,
            end = %task.end,
            "task added"
        );
        self.tasks.push(task);
        Ok(())
    }

    /// Removes the first task whose description matches, case-insensitively.
    ///
    /// # Errors
    /// [`ScheduleError::TaskNotFound`] if no task matches; the list is
    /// left unchanged.
    pub fn remove_task(&mut self, description: &str) -> Result<(), ScheduleError> {
        match self
            .tasks
            .iter()
            .position(|t| t.matches_description(description))
        {
            Some(index) => {
                let removed = self.tasks.remove(index);
                info!(description = %removed.description, "task removed");
                Ok(())
            }
            None => Err(ScheduleError::TaskNotFound {
                description: description.to_string(),
            }),
        }
    }

    /// Rewrites a task's start and end times.
    ///
    /// Both new times are validated before either is written, so a failed
    /// edit leaves the task exactly as it was. The edit does not re-run
    /// conflict detection against the rest of the schedule.
    ///
    /// # Errors
    /// [`ScheduleError::TaskNotFound`] if no task matches the description;
    /// [`ScheduleError::InvalidTime`] if either new time is malformed.
    pub fn edit_task(
        &mut self,
        description: &str,
        new_start: &str,
        new_end: &str,
    ) -> Result<(), ScheduleError> {
        let task = self.find_mut(description)?;
        if !is_valid_time(new_start) {
            return Err(ScheduleError::InvalidTime {
                value: new_start.to_string(),
            });
        }
        if !is_valid_time(new_end) {
            return Err(ScheduleError::InvalidTime {
                value: new_end.to_string(),
            });
        }
        task.start = new_start.to_string();
        task.end = new_end.to_string();
        Ok(())
    }

    /// Marks a task completed. The transition is one-way.
    ///
    /// # Errors
    /// [`ScheduleError::TaskNotFound`] if no task matches.
    pub fn mark_completed(&mut self, description: &str) -> Result<(), ScheduleError> {
        self.find_mut(description)?.mark_completed();
        Ok(())
    }

    /// Snapshot of all tasks, sorted ascending by start time.
    ///
    /// Sorting compares the raw `HH:MM` strings, which is correct for
    /// zero-padded input. Insertion order of the underlying list is not
    /// disturbed.
    pub fn tasks_by_start(&self) -> Vec<Task> {
        let mut snapshot = self.tasks.clone();
        snapshot.sort_by(|a, b| a.start.cmp(&b.start));
        snapshot
    }

    /// Snapshot of tasks whose priority matches, case-insensitively,
    /// in insertion order.
    pub fn tasks_with_priority(&self, priority: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.matches_priority(priority))
            .cloned()
            .collect()
    }

    /// Number of scheduled tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn find_mut(&mut self, description: &str) -> Result<&mut Task, ScheduleError> {
        self.tasks
            .iter_mut()
            .find(|t| t.matches_description(description))
            .ok_or_else(|| ScheduleError::TaskNotFound {
                description: description.to_string(),
            })
    }
}

impl Default for ScheduleManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::factory::create_task;

    /// Records every (candidate, existing) pair it is notified with.
    struct RecordingObserver {
        conflicts: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl ConflictObserver for RecordingObserver {
        fn on_conflict(&self, new_task: &Task, existing: &Task) {
            self.conflicts
                .lock()
                .unwrap()
                .push((new_task.description.clone(), existing.description.clone()));
        }
    }

    fn task(description: &str, start: &str, end: &str, priority: &str) -> Task {
        create_task(description, start, end, priority).unwrap()
    }

    #[test]
    fn add_appends_without_conflict() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();
        manager.add_task(task("Lunch", "12:00", "13:00", "Low")).unwrap();
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn abutting_intervals_do_not_conflict() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();
        // new.start == existing.end
        manager.add_task(task("Breakfast", "08:00", "08:30", "Low")).unwrap();
        // new.end == existing.start
        manager.add_task(task("Wake up", "06:30", "07:00", "Low")).unwrap();
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn overlap_rejects_and_notifies_every_observer_once() {
        let conflicts_a = Arc::new(Mutex::new(Vec::new()));
        let conflicts_b = Arc::new(Mutex::new(Vec::new()));

        let mut manager = ScheduleManager::new();
        manager.add_observer(Box::new(RecordingObserver {
            conflicts: Arc::clone(&conflicts_a),
        }));
        manager.add_observer(Box::new(RecordingObserver {
            conflicts: Arc::clone(&conflicts_b),
        }));

        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();
        let err = manager
            .add_task(task("Meeting", "07:30", "08:30", "Medium"))
            .unwrap_err();

        assert_eq!(
            err,
            ScheduleError::Conflict {
                description: "Exercise".into()
            }
        );
        assert_eq!(manager.len(), 1);
        let expected = vec![("Meeting".to_string(), "Exercise".to_string())];
        assert_eq!(*conflicts_a.lock().unwrap(), expected);
        assert_eq!(*conflicts_b.lock().unwrap(), expected);
    }

    #[test]
    fn conflict_reports_first_overlap_in_insertion_order() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Late", "14:00", "15:00", "Low")).unwrap();
        manager.add_task(task("Early", "09:00", "10:00", "Low")).unwrap();

        // Overlaps both; "Late" was inserted first.
        let err = manager
            .add_task(task("All day", "08:00", "16:00", "High"))
            .unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Conflict {
                description: "Late".into()
            }
        );
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();
        manager.remove_task("EXERCISE").unwrap();
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_unknown_reports_not_found_and_keeps_list() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();
        let err = manager.remove_task("Nap").unwrap_err();
        assert_eq!(
            err,
            ScheduleError::TaskNotFound {
                description: "Nap".into()
            }
        );
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn edit_updates_both_times() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();
        manager.edit_task("exercise", "06:00", "07:00").unwrap();
        let tasks = manager.tasks_by_start();
        assert_eq!(tasks[0].start, "06:00");
        assert_eq!(tasks[0].end, "07:00");
    }

    #[test]
    fn edit_with_invalid_time_leaves_task_unchanged() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();

        let err = manager.edit_task("Exercise", "06:00", "25:00").unwrap_err();
        assert_eq!(
            err,
            ScheduleError::InvalidTime {
                value: "25:00".into()
            }
        );
        let tasks = manager.tasks_by_start();
        assert_eq!(tasks[0].start, "07:00");
        assert_eq!(tasks[0].end, "08:00");
    }

    #[test]
    fn edit_unknown_reports_not_found_before_validating_times() {
        let mut manager = ScheduleManager::new();
        let err = manager.edit_task("Nap", "bad", "worse").unwrap_err();
        assert_eq!(
            err,
            ScheduleError::TaskNotFound {
                description: "Nap".into()
            }
        );
    }

    // Known limitation: editing does not re-run conflict detection, so an
    // edit can introduce an overlap that an insert would have rejected.
    #[test]
    fn edit_can_introduce_overlap() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();
        manager.add_task(task("Lunch", "12:00", "13:00", "Low")).unwrap();

        manager.edit_task("Lunch", "07:30", "08:30").unwrap();
        let tasks = manager.tasks_by_start();
        assert!(tasks[0].overlaps(&tasks[1]));
    }

    #[test]
    fn mark_completed_sets_flag_once_and_for_all() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();
        manager.mark_completed("exercise").unwrap();
        assert!(manager.tasks_by_start()[0].completed);

        // Idempotent; there is no way back to pending.
        manager.mark_completed("Exercise").unwrap();
        assert!(manager.tasks_by_start()[0].completed);
    }

    #[test]
    fn mark_completed_unknown_reports_not_found() {
        let mut manager = ScheduleManager::new();
        let err = manager.mark_completed("Nap").unwrap_err();
        assert_eq!(
            err,
            ScheduleError::TaskNotFound {
                description: "Nap".into()
            }
        );
    }

    #[test]
    fn tasks_by_start_sorts_regardless_of_insertion_order() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Afternoon", "14:00", "15:00", "Low")).unwrap();
        manager.add_task(task("Morning", "09:00", "10:00", "High")).unwrap();

        let sorted = manager.tasks_by_start();
        assert_eq!(sorted[0].description, "Morning");
        assert_eq!(sorted[1].description, "Afternoon");

        // Underlying insertion order is untouched.
        let by_priority: Vec<_> = manager.tasks_with_priority("Low");
        assert_eq!(by_priority[0].description, "Afternoon");
    }

    #[test]
    fn tasks_with_priority_filters_case_insensitively_in_insertion_order() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Afternoon", "14:00", "15:00", "low")).unwrap();
        manager.add_task(task("Morning", "09:00", "10:00", "High")).unwrap();
        manager.add_task(task("Evening", "18:00", "19:00", "LOW")).unwrap();

        let low: Vec<_> = manager
            .tasks_with_priority("Low")
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(low, vec!["Afternoon", "Evening"]);
        assert!(manager.tasks_with_priority("Critical").is_empty());
    }

    #[test]
    fn daily_scenario() {
        let mut manager = ScheduleManager::new();
        manager.add_task(task("Exercise", "07:00", "08:00", "High")).unwrap();

        // Strict overlap with Exercise.
        assert!(manager
            .add_task(task("Meeting", "07:30", "08:30", "Medium"))
            .is_err());
        assert_eq!(manager.len(), 1);

        // Abuts Exercise, so it fits.
        manager.add_task(task("Lunch", "08:00", "09:00", "Low")).unwrap();
        assert_eq!(manager.len(), 2);
    }
}
