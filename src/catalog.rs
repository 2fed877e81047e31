//! Built-in starter templates used to seed an empty pool.

use crate::core::{Frequency, TaskTemplate};

const DEFAULT_TASKS: &[(&str, Frequency, &str)] = &[
    ("Drink 8 glasses of water", Frequency::Daily, "Stay hydrated throughout the day"),
    ("Take a 10-minute walk", Frequency::Daily, "Get some fresh air and light exercise"),
    ("Read for 15 minutes", Frequency::Daily, "Expand your knowledge or enjoy fiction"),
    ("Practice gratitude", Frequency::Daily, "Write down 3 things you're grateful for"),
    ("Meditate for 5 minutes", Frequency::Daily, "Take time to center yourself"),
    ("Tidy up your workspace", Frequency::Daily, "Keep your environment organized"),
    ("Do 20 pushups or stretches", Frequency::Daily, "Keep your body active"),
    ("Plan tomorrow's priorities", Frequency::Daily, "Set yourself up for success"),
    ("Deep clean one room", Frequency::Weekly, "Focus on thoroughly cleaning one area"),
    ("Call a friend or family member", Frequency::Weekly, "Maintain important relationships"),
    ("Try a new recipe", Frequency::Weekly, "Explore different cuisines and flavors"),
    ("Review and organize finances", Frequency::Weekly, "Check budgets and expenses"),
    ("Learn something new online", Frequency::Weekly, "Take a course or watch educational content"),
    ("Go for a nature walk or hike", Frequency::Weekly, "Connect with the outdoors"),
    ("Declutter a drawer or closet", Frequency::Weekly, "Organize and donate unused items"),
    ("Write in a journal", Frequency::Weekly, "Reflect on your thoughts and experiences"),
    ("Practice a hobby or skill", Frequency::Weekly, "Dedicate time to something you enjoy"),
    (
        "Plan a future adventure",
        Frequency::Weekly,
        "Research and plan an upcoming trip or activity",
    ),
    ("Deep clean and organize home", Frequency::Monthly, "Complete thorough cleaning session"),
    ("Review and update goals", Frequency::Monthly, "Assess progress and adjust objectives"),
    ("Backup important files", Frequency::Monthly, "Secure your digital data"),
    ("Schedule health checkups", Frequency::Monthly, "Maintain your physical health"),
    ("Review subscriptions and memberships", Frequency::Monthly, "Cancel unused services"),
    ("Plan next month's budget", Frequency::Monthly, "Set financial goals and limits"),
    ("Update resume or LinkedIn", Frequency::Monthly, "Keep professional profiles current"),
    ("Try a new activity or experience", Frequency::Monthly, "Step out of your comfort zone"),
    ("Reconnect with old friends", Frequency::Monthly, "Reach out to people you haven't spoken to"),
    ("Donate items you no longer need", Frequency::Monthly, "Give back to the community"),
];

/// The starter pool, each template with a freshly generated id.
pub fn default_templates() -> Vec<TaskTemplate> {
    DEFAULT_TASKS
        .iter()
        .map(|(name, frequency, description)| {
            TaskTemplate::new(name, Some(*description), *frequency)
        })
        .collect()
}
