use crate::models::{NewContestResult, Submission};

/// Rank a closed contest's submissions and produce its result batch.
///
/// Submissions are ordered by vote total descending, ties broken by
/// submission time ascending (the earlier entry wins the tie). Ranks follow
/// standard competition ranking with gaps: tied entries share a rank and the
/// next distinct score takes its 1-based position in the sorted order, so
/// [20, 10, 10, 5] yields 1, 2, 2, 4. Every entry ranked first carries the
/// winner flag.
///
/// Pure and total: any input list, including an empty one, produces a valid
/// batch without error.
pub fn rank_submissions(contest_id: i64, submissions: &[Submission]) -> Vec<NewContestResult> {
    let mut ordered: Vec<&Submission> = submissions.iter().collect();
    ordered.sort_by(|a, b| {
        b.total_votes
            .cmp(&a.total_votes)
            .then_with(|| a.submitted_at.cmp(&b.submitted_at))
    });

    // Single pass; the accumulator's last element carries the tie state, so
    // there are no loop-local rank counters to get out of sync.
    ordered
        .iter()
        .enumerate()
        .fold(Vec::with_capacity(ordered.len()), |mut acc, (i, submission)| {
            let final_rank = match acc.last() {
                Some(prev) if prev.final_score == submission.total_votes => prev.final_rank,
                _ => (i + 1) as i32,
            };

            acc.push(NewContestResult {
                contest_id,
                photo_id: submission.photo_id,
                final_rank,
                final_score: submission.total_votes,
                is_winner: final_rank == 1,
            });
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap()
    }

    fn submission(photo_id: i64, total_votes: i32, submitted_at: DateTime<Utc>) -> Submission {
        Submission {
            photo_id,
            contest_id: 1,
            user_id: format!("user-{photo_id}"),
            photo_url: format!("https://photos.example/{photo_id}.jpg"),
            title: format!("Photo {photo_id}"),
            description: None,
            total_votes,
            submitted_at,
            removed_at: None,
        }
    }

    #[test]
    fn test_empty_input_produces_empty_batch() {
        assert!(rank_submissions(1, &[]).is_empty());
    }

    #[test]
    fn test_single_submission_is_rank_one_winner() {
        let results = rank_submissions(1, &[submission(10, 0, ts(1))]);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].final_rank, 1);
        assert_eq!(results[0].final_score, 0);
        assert!(results[0].is_winner);
    }

    #[test]
    fn test_ties_produce_rank_gaps() {
        let submissions = vec![
            submission(10, 20, ts(1)),
            submission(11, 10, ts(2)),
            submission(12, 10, ts(3)),
            submission(13, 5, ts(4)),
        ];

        let results = rank_submissions(1, &submissions);

        let ranks: Vec<i32> = results.iter().map(|r| r.final_rank).collect();
        assert_eq!(ranks, vec![1, 2, 2, 4]);

        let winners: Vec<bool> = results.iter().map(|r| r.is_winner).collect();
        assert_eq!(winners, vec![true, false, false, false]);
    }

    #[test]
    fn test_equal_scores_break_ties_by_submission_time() {
        let earlier = submission(20, 7, ts(1));
        let later = submission(21, 7, ts(2));

        // Input order deliberately reversed
        let results = rank_submissions(1, &[later, earlier]);

        assert_eq!(results[0].photo_id, 20);
        assert_eq!(results[1].photo_id, 21);
        assert_eq!(results[0].final_rank, 1);
        assert_eq!(results[1].final_rank, 1);
    }

    #[test]
    fn test_tied_first_place_makes_every_leader_a_winner() {
        let submissions = vec![
            submission(30, 5, ts(1)),
            submission(31, 5, ts(2)),
            submission(32, 3, ts(3)),
        ];

        let results = rank_submissions(1, &submissions);

        let ranks: Vec<i32> = results.iter().map(|r| r.final_rank).collect();
        assert_eq!(ranks, vec![1, 1, 3]);

        let winners: Vec<bool> = results.iter().map(|r| r.is_winner).collect();
        assert_eq!(winners, vec![true, true, false]);
    }

    #[test]
    fn test_score_is_copied_from_vote_total() {
        let submissions = vec![submission(40, 12, ts(1)), submission(41, 9, ts(2))];

        let results = rank_submissions(7, &submissions);

        assert!(results.iter().all(|r| r.contest_id == 7));
        assert_eq!(results[0].final_score, 12);
        assert_eq!(results[1].final_score, 9);
    }
}
