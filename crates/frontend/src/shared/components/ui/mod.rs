pub mod alert;
pub mod button;
pub mod file_input;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use alert::Alert;
pub use button::Button;
pub use file_input::FileInput;
pub use input::Input;
pub use radio::RadioGroup;
pub use select::Select;
pub use textarea::Textarea;
