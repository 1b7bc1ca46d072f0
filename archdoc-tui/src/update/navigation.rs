//! 导航更新逻辑

use crate::message::NavigationMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::Confirm => {
            if let Some(section) = app.navigation.current_section() {
                app.switch_section(section);
            }
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }

        NavigationMessage::JumpTo(section) => {
            app.switch_section(section);
        }
    }
}
