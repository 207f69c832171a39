//! Templated coaching text: reduction tips, goal plans and meal ideas.
//!
//! Output is markdown, ready to be rendered by a presentation layer.

use crate::calculator::{Breakdown, Category};
use crate::factors::Diet;
use crate::goals::GoalProgress;

const TIPS_PER_REQUEST: usize = 3;

fn category_tip(category: Category) -> &'static str {
    match category {
        Category::Energy => {
            "Your **Energy** use is significant. Try switching to LED bulbs and unplugging electronics when not in use. This 'phantom load' adds up!"
        }
        Category::Transport => {
            "Your **Transport** adds up week by week. Batch errands into a single trip, car-pool, or swap short drives for cycling or public transit."
        }
        Category::Flights => {
            "**Flights** are a big one-time hit. For future travel, consider purchasing carbon offsets or, for shorter trips, look into train or bus options."
        }
        Category::Diet => {
            "Your **Diet** has a noticeable impact. Try introducing one or two plant-based meal days per week, like 'Meatless Monday'."
        }
        Category::Waste => {
            "Household **Waste** is worth a look. Compost food scraps and recycle packaging to keep it out of landfill."
        }
    }
}

/// One action for each of the three largest categories, largest first.
pub fn reduction_tips(breakdown: &Breakdown, total_footprint: f64) -> String {
    let mut tips = format!(
        "Your monthly footprint is {total_footprint:.2} kg CO2e. Here are a few personalized tips based on your results:\n"
    );

    for (idx, (category, value)) in breakdown
        .ranked()
        .into_iter()
        .take(TIPS_PER_REQUEST)
        .enumerate()
    {
        tips.push_str(&format!(
            "\n**Action {}:** {} ({value:.2} kg CO2e/month)\n",
            idx + 1,
            category_tip(category),
        ));
    }

    tips
}

/// A three-step plan towards a percentage reduction of the latest footprint.
pub fn goal_plan(reduction_percent: f64, total_footprint: f64, breakdown: &Breakdown) -> String {
    let progress = GoalProgress::new(total_footprint, reduction_percent);
    let focus = if breakdown.diet > breakdown.energy {
        "Diet"
    } else {
        "Energy"
    };

    let mut plan = format!(
        "Here is a plan to help you hit your {reduction_percent}% reduction goal (about {:.2} kg CO2e):\n\n",
        progress.target_reduction
    );
    plan.push_str(&format!(
        "**Action 1: Focus on Your {focus}**\n*This is a high-impact area for you. Try replacing one red meat meal per week with a plant-based option like lentils.*\n\n"
    ));
    plan.push_str(&format!(
        "**Action 2: Optimize Your Transport**\n*Your transport footprint is {} kg. Can you batch all your weekly errands into one trip?*\n\n",
        breakdown.transport
    ));
    plan.push_str(
        "**Action 3: A Small Tweak, a Big Win**\n*Lower your thermostat by 1 degree (if in winter) or use a smart power strip to cut phantom load.*\n\n",
    );
    plan.push_str(&format!(
        "*Stick with these, and you'll be well on your way to hitting your {reduction_percent}% goal!*"
    ));
    plan
}

pub fn meal_ideas(diet: Option<Diet>) -> &'static str {
    match diet {
        Some(Diet::Vegan) => {
            "**Breakfast:** Oatmeal with Berries & Chia Seeds.\n**Lunch:** Spicy Black Bean & Avocado Tacos.\n**Dinner:** Red Lentil Curry with Spinach."
        }
        _ => {
            "**Breakfast:** Scrambled Tofu or Eggs with Veggies.\n**Lunch:** Big Lentil & Roasted Vegetable Salad.\n**Dinner:** 'Less-Meat' Mushroom & Beef (or Bean) Burgers."
        }
    }
}
