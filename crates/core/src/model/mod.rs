mod answer;
mod ids;
mod progress;
mod question;
mod result;
mod sign;

pub use ids::{CategoryId, ParseIdError, QuestionId, SignId};

pub use answer::{AnswerError, AnswerRecord};
pub use progress::UserProgress;
pub use question::{OPTION_COUNT, Question, QuestionError, option_label};
pub use result::{Performance, QuizResult, QuizResultError, score_percent};
pub use sign::{
    ParseSignAttributeError, SearchFilters, SignCategory, SignColor, SignShape, TrafficSign,
};
